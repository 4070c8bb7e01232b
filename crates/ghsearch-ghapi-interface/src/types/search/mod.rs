mod search_user;
mod search_users_response;

pub use search_user::GhSearchUser;
pub use search_users_response::GhSearchUsersResponse;
