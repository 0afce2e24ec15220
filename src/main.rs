use std::io::{self, BufReader};

use futures::StreamExt;
use tracing::debug;

use tiered_bank::domain::traits::CommandStream;
use tiered_bank::domain::{AccountRepository, Command, Error, NumberGenerator, Tier};
use tiered_bank::factory::AccountFactory;
use tiered_bank::generator::RandomNumberGenerator;
use tiered_bank::ingestion::CommandReader;
use tiered_bank::repository::InMemoryRepository;
use tiered_bank::service::BankService;

/// The console opens every account at the same tier.
const NEW_ACCOUNT_TIER: Tier = Tier::Platinum;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logs go to stderr; stdout is reserved for command replies.
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let repository = InMemoryRepository::new();
    let factory = AccountFactory::new(RandomNumberGenerator::new());
    let mut service = BankService::new(repository, factory);

    let mut ingestion = CommandReader::new(BufReader::new(io::stdin()));
    let mut commands = ingestion.stream();

    while let Some(next) = commands.next().await {
        match next {
            Ok(Command::Exit) => break,
            Ok(command) => {
                debug!(%command, "dispatching");
                match run_command(&mut service, command) {
                    Ok(()) => println!("Successful!"),
                    Err(e) => println!("{e}"),
                }
            }
            Err(e) => println!("{e}"),
        }
    }

    Ok(())
}

fn run_command<R, G>(service: &mut BankService<R, G>, command: Command) -> Result<(), Error>
where
    R: AccountRepository,
    G: NumberGenerator,
{
    match command {
        Command::NewAccount { name, email } => service
            .create_account(&name, &email, NEW_ACCOUNT_TIER)
            .map(|_| ()),
        Command::Deposit { number, amount } => service.deposit(&number, amount),
        Command::Withdraw { number, amount } => service.withdraw(&number, amount),
        Command::Close { number } => service.close_account(&number),
        // EXIT never reaches here; the loop breaks on it.
        Command::Exit => Ok(()),
    }
}
