use saludmente::app::App;
use saludmente::error::user_friendly_message;
use saludmente::logging::init_tracing;
use saludmente::simple::{play_exercise, print_catalog};
use saludmente::{Result, SaludMenteError};

const USAGE: &str = "\
SaludMente - bienestar mental en tu terminal

Uso:
  saludmente            Abre la aplicación interactiva
  saludmente list       Muestra los ejercicios de relajación
  saludmente play <id>  Reproduce un ejercicio guiado sin interfaz
  saludmente --help     Muestra esta ayuda";

enum Command {
    Tui,
    List,
    Play(u32),
    Help,
}

fn parse_args(args: &[String]) -> Result<Command> {
    match args {
        [] => Ok(Command::Tui),
        [flag] if flag == "-h" || flag == "--help" => Ok(Command::Help),
        [cmd] if cmd == "list" => Ok(Command::List),
        [cmd, id] if cmd == "play" => id.parse().map(Command::Play).map_err(|_| {
            SaludMenteError::ValidationError(format!("id de ejercicio inválido: {}", id))
        }),
        _ => Err(SaludMenteError::ValidationError(format!(
            "argumentos no reconocidos: {}",
            args.join(" ")
        ))),
    }
}

/// Log and print the run and restore outcomes. Returns true if either failed.
fn report_tui_exit(outcome: &Result<()>, restored: &Result<()>) -> bool {
    let mut failed = false;
    if let Err(e) = outcome {
        tracing::error!(error = %e, "application error");
        eprintln!("Application error: {}", e);
        failed = true;
    }
    if let Err(e) = restored {
        tracing::error!(error = %e, "failed to restore terminal");
        eprintln!("Failed to restore terminal: {}", e);
        failed = true;
    }
    failed
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}\n\n{}", user_friendly_message(&e), USAGE);
            std::process::exit(2);
        }
    };

    init_tracing();

    match command {
        Command::Help => println!("{}", USAGE),
        Command::List => print_catalog()?,
        Command::Play(id) => {
            if let Err(e) = play_exercise(id).await {
                eprintln!("{}", user_friendly_message(&e));
                std::process::exit(1);
            }
        }
        Command::Tui => {
            let mut app = App::new()?;
            let outcome = match app.init() {
                Ok(()) => app.run().await,
                Err(e) => Err(e),
            };
            // Raw mode may be on even when init failed part way
            let restored = app.restore();

            let failed = report_tui_exit(&outcome, &restored);
            if failed {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tui_error() -> SaludMenteError {
        SaludMenteError::TuiError("terminal gone".to_string())
    }

    #[test]
    fn test_restore_failure_does_not_hide_run_error() {
        assert!(!report_tui_exit(&Ok(()), &Ok(())));
        assert!(report_tui_exit(&Err(tui_error()), &Ok(())));
        assert!(report_tui_exit(&Ok(()), &Err(tui_error())));
        assert!(report_tui_exit(&Err(tui_error()), &Err(tui_error())));
    }

    #[test]
    fn test_parse_args() {
        assert!(matches!(parse_args(&[]), Ok(Command::Tui)));
        assert!(matches!(parse_args(&["list".to_string()]), Ok(Command::List)));
        assert!(matches!(
            parse_args(&["play".to_string(), "2".to_string()]),
            Ok(Command::Play(2))
        ));
        assert!(parse_args(&["play".to_string(), "x".to_string()]).is_err());
    }
}
