use client_common::CheckClient;
use common::api::PasswordAssessment;
use eyre::WrapErr;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

fn setup_logger() -> eyre::Result<()> {

    let filter = EnvFilter::from_default_env()
        // Set the base level when not matched by other directives to WARN.
        .add_directive(LevelFilter::WARN.into())
        // Set the max level for `my_crate::my_mod` to DEBUG, overriding
        // any directives parsed from the env variable.
        .add_directive("common=trace".parse()?)
        .add_directive("client_common=trace".parse()?)
        .add_directive("client_cli=trace".parse()?)
    ;

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
    .with_max_level(tracing::Level::TRACE)
    .with_env_filter(filter)
    .finish();

    tracing::subscriber::set_global_default(subscriber)
        .wrap_err("setting default subscriber failed")?;

    Ok(())
}

fn print_assessment(assessment: &PasswordAssessment) {
    if assessment.is_weak {
        println!("weak password:");
        for issue in &assessment.issues {
            println!("  - {}", issue);
        }
        return;
    }

    if let Some(message) = &assessment.message {
        println!("{}", message);
    }
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    setup_logger()?;

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| common::consts::CHECK_API_URL.to_string());
    let client = CheckClient::new(&url);

    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

    let mut rl = DefaultEditor::new()?;
    println!("type a candidate password, CTRL-D quits");
    loop {
        // no history on purpose: candidates must never be persisted
        let readline = rl.readline(">> ");
        match readline {
            Ok(line) => {
                if line.is_empty() {
                    continue;
                }
                let assessment = rt.block_on(client.check(&line));
                print_assessment(&assessment);
            },
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break
            },
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break
            },
            Err(err) => {
                println!("Error: {:?}", err);
                break
            }
        }
    }
    Ok(())
}
