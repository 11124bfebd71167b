pub use self::header::{auth_cookie_string, token_headers};
pub use self::options::{CookieMaxAge, CookieOptions, DeploymentMode, SameSite};
pub use self::parse::extract_token;
pub use self::token::{AccessToken, RefreshToken};

pub mod cookie;
pub mod header;
pub mod options;
pub mod parse;
pub mod token;
