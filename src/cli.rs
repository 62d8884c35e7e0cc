use clap::{builder::NonEmptyStringValueParser, Parser};

pub const DEFAULT_EMAIL: &str = "admin@gmail.com";
pub const DEFAULT_PASSWORD: &str = "password";

#[derive(Parser, Debug)]
#[command(name = "create_superuser")]
#[command(about = "Create a superuser in the Urban Drive application.", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Email address for the superuser
    #[arg(
        long,
        value_name = "EMAIL",
        default_value = DEFAULT_EMAIL,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub email: String,

    /// Password for the superuser
    #[arg(
        long,
        value_name = "PASSWORD",
        default_value = DEFAULT_PASSWORD,
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub password: String,
}
