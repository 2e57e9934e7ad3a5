mod console;
pub use console::ConsoleCredentialProvider;

mod credentials_file;
pub use credentials_file::CredentialsFileProvider;

mod default;
pub use default::default_chain;

mod env;
pub use env::EnvCredentialProvider;
