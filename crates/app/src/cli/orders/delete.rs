use std::io::{self, BufRead, Write};

use clap::Args;

use orderdesk::orders::OrderId;
use orderdesk_app::{
    api::OrdersBackend,
    views::{DeleteOutcome, EditOrderForm, EditOrderLoad},
};

#[derive(Debug, Args)]
pub(crate) struct DeleteOrderArgs {
    /// Order id
    order: OrderId,

    /// Skip the confirmation prompt
    #[arg(long, short)]
    yes: bool,
}

pub(crate) async fn run(backend: &dyn OrdersBackend, args: DeleteOrderArgs) -> Result<(), String> {
    let view = match EditOrderForm::load(backend, args.order)
        .await
        .map_err(|error| error.to_string())?
    {
        EditOrderLoad::Loaded(view) => view,
        EditOrderLoad::RedirectToList => return Err(format!("order {} not found", args.order)),
    };

    let confirm = |prompt: &str| args.yes || ask(prompt);

    match view.delete(backend, confirm).await {
        DeleteOutcome::Cancelled => {
            println!("order {} was not deleted", args.order);

            Ok(())
        }
        DeleteOutcome::Deleted(message) => {
            println!("{message}");

            Ok(())
        }
        DeleteOutcome::Failed(message) => Err(message),
    }
}

fn ask(prompt: &str) -> bool {
    let mut stdout = io::stdout().lock();

    if write!(stdout, "{prompt} [y/N] ")
        .and_then(|()| stdout.flush())
        .is_err()
    {
        return false;
    }

    let mut answer = String::new();

    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }

    is_yes(&answer)
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("no"));
    }
}
