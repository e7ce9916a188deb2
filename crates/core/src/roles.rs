//! Role tiers and the authorization gate.
//!
//! Every gated action declares the minimum [`Tier`] it needs; callers are
//! admitted when their own tier is at least that high. Tiers are totally
//! ordered: `anonymous < user < moderator < admin`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const ROLE_ANONYMOUS: &str = "anonymous";
pub const ROLE_USER: &str = "user";
pub const ROLE_MODERATOR: &str = "moderator";
pub const ROLE_ADMIN: &str = "admin";

/// Admin `position` value that grants the moderator tier instead of admin.
pub const POSITION_MODERATOR: &str = "moderator";

/// Ordered role level controlling action authorization.
///
/// Variant order is significant: the derived `Ord` is the tier order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Anonymous,
    User,
    Moderator,
    Admin,
}

impl Tier {
    /// Parse from the role name carried in tokens.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            ROLE_ANONYMOUS => Ok(Self::Anonymous),
            ROLE_USER => Ok(Self::User),
            ROLE_MODERATOR => Ok(Self::Moderator),
            ROLE_ADMIN => Ok(Self::Admin),
            other => Err(CoreError::Validation(format!("Unknown tier '{other}'"))),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Anonymous => ROLE_ANONYMOUS,
            Self::User => ROLE_USER,
            Self::Moderator => ROLE_MODERATOR,
            Self::Admin => ROLE_ADMIN,
        }
    }

    /// Resolve the tier of a registered user from their admin position, if any.
    ///
    /// No admin row means a plain user; the `moderator` position is the
    /// moderator tier; every other position is a full admin.
    pub fn for_registered(admin_position: Option<&str>) -> Self {
        match admin_position {
            None => Self::User,
            Some(POSITION_MODERATOR) => Self::Moderator,
            Some(_) => Self::Admin,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every entry point that sits behind the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    EntryIndex,
    EnterUser,
    EnterAdmin,
    EnterDirector,
    EnterActor,
    EnterMovie,
    EnterReview,
    EnterActedIn,
    UploadPoster,
    BulkImport,
    SubmitMovieReview,
}

impl Action {
    pub fn required_tier(self) -> Tier {
        match self {
            Self::EnterUser | Self::EnterAdmin | Self::BulkImport => Tier::Admin,
            Self::EntryIndex
            | Self::EnterDirector
            | Self::EnterActor
            | Self::EnterMovie
            | Self::EnterReview
            | Self::EnterActedIn
            | Self::UploadPoster => Tier::Moderator,
            Self::SubmitMovieReview => Tier::User,
        }
    }

    /// Resource identifier reported back on denial.
    pub fn resource(self) -> &'static str {
        match self {
            Self::EntryIndex => "/entry",
            Self::EnterUser => "/entry/user",
            Self::EnterAdmin => "/entry/admin",
            Self::EnterDirector => "/entry/director",
            Self::EnterActor => "/entry/actor",
            Self::EnterMovie => "/entry/movie",
            Self::EnterReview => "/entry/review",
            Self::EnterActedIn => "/entry/acted",
            Self::UploadPoster => "/entry/poster",
            Self::BulkImport => "/entry/bulk",
            Self::SubmitMovieReview => "/movie/review",
        }
    }
}

/// Admit `caller` to `action` or return a structured `Forbidden`.
pub fn authorize(caller: Tier, action: Action) -> Result<(), CoreError> {
    let required = action.required_tier();
    if caller >= required {
        Ok(())
    } else {
        Err(CoreError::Forbidden {
            required,
            resource: action.resource().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn tiers_are_ordered() {
        assert!(Tier::Anonymous < Tier::User);
        assert!(Tier::User < Tier::Moderator);
        assert!(Tier::Moderator < Tier::Admin);
    }

    #[test]
    fn admin_passes_every_gate() {
        for action in [
            Action::EntryIndex,
            Action::EnterUser,
            Action::EnterAdmin,
            Action::EnterDirector,
            Action::EnterActor,
            Action::EnterMovie,
            Action::EnterReview,
            Action::EnterActedIn,
            Action::UploadPoster,
            Action::BulkImport,
            Action::SubmitMovieReview,
        ] {
            assert!(authorize(Tier::Admin, action).is_ok(), "{action:?}");
        }
    }

    #[test]
    fn moderator_cannot_create_users_or_bulk_import() {
        assert!(authorize(Tier::Moderator, Action::EnterMovie).is_ok());
        assert_matches!(
            authorize(Tier::Moderator, Action::EnterUser),
            Err(CoreError::Forbidden { required: Tier::Admin, resource }) if resource == "/entry/user"
        );
        assert_matches!(
            authorize(Tier::Moderator, Action::BulkImport),
            Err(CoreError::Forbidden { required: Tier::Admin, .. })
        );
    }

    #[test]
    fn anonymous_denied_movie_review() {
        assert_matches!(
            authorize(Tier::Anonymous, Action::SubmitMovieReview),
            Err(CoreError::Forbidden { required: Tier::User, .. })
        );
        assert!(authorize(Tier::User, Action::SubmitMovieReview).is_ok());
    }

    #[test]
    fn registered_tier_from_admin_position() {
        assert_eq!(Tier::for_registered(None), Tier::User);
        assert_eq!(Tier::for_registered(Some("moderator")), Tier::Moderator);
        assert_eq!(Tier::for_registered(Some("head_curator")), Tier::Admin);
    }

    #[test]
    fn tier_names_round_trip() {
        assert_eq!(Tier::from_name("moderator").unwrap(), Tier::Moderator);
        assert!(Tier::from_name("root").is_err());
        assert_eq!(Tier::Admin.to_string(), "admin");
    }
}
