//! IAM API shapes.

mod user;

pub use user::UserRecord;
