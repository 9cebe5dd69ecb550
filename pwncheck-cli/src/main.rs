use std::io::{self, BufRead};

use clap::Parser;
use pwncheck::{DEFAULT_REQUESTS_PER_SECOND, Throttle, check_passwords};
use pwncheck_api::{DEFAULT_BASE_URL, PwnedPasswords};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pwncheck")]
#[command(about = "Check passwords against the Pwned Passwords breach corpus without disclosing them")]
struct Args {
    /// Passwords to check; reads one per line from stdin when omitted
    passwords: Vec<String>,

    /// Base URL of the range API
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Maximum range requests per second
    #[arg(long, default_value_t = DEFAULT_REQUESTS_PER_SECOND,
          value_parser = clap::value_parser!(u32).range(1..))]
    rate: u32,
}

#[derive(Debug, thiserror::Error)]
enum Error {
    #[error(transparent)]
    Lookup(#[from] pwncheck::Error),

    #[error(transparent)]
    Http(#[from] pwncheck_api::BuildError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("no passwords supplied")]
    NoInput,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let passwords = if args.passwords.is_empty() {
        io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?
    } else {
        args.passwords
    };
    if passwords.is_empty() {
        return Err(Error::NoInput);
    }

    let client = PwnedPasswords::with_base_url(&args.api_url)?;
    let throttle = Throttle::per_second(args.rate);

    let items: Vec<&str> = passwords.iter().map(String::as_str).collect();
    let counts = check_passwords(&items, &client, &throttle).await?;

    // One line per input, in input order. The passwords themselves are
    // never echoed.
    for password in &passwords {
        match counts[password.as_str()] {
            0 => println!("not found"),
            count => println!("pwned {count} times"),
        }
    }

    Ok(())
}
