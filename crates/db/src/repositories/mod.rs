//! Repositories: async store operations over a [`crate::DbPool`].

mod user_repo;
mod video_repo;

pub use user_repo::UserRepo;
pub use video_repo::VideoRepo;
