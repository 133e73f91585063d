//! Social graph module for Mingle

mod service;

pub use service::{FollowOutcome, FollowService, SocialError, UnfollowOutcome};
