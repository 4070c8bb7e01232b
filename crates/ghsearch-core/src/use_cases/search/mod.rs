mod search_users;

pub use search_users::{SearchUsers, SearchUsersInterface};
