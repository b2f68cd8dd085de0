// SPDX-License-Identifier: MPL-2.0
use folio_i18n::app::{self, Flags};
use folio_i18n::config::DEFAULT_LOG_FILTER;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
folio-i18n - resolve the portfolio's startup locale

USAGE:
  folio-i18n [OPTIONS]

OPTIONS:
  --config-dir <DIR>   Directory holding settings.toml
  --i18n-dir <DIR>     Load .ftl catalogs from DIR instead of the embedded ones
  --platform <LIST>    Comma-separated locales to use instead of the OS list
  --validate-stored    Ignore a stored preference that is not a supported locale
  --set-lang <TAG>     Store TAG as the preferred language and exit
  --clear-lang         Remove the stored preference and exit
  -h, --help           Print this help

Set RUST_LOG=debug to trace resolution decisions.
";

enum Action {
    Show,
    SetLanguage(String),
    ClearLanguage,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return ExitCode::SUCCESS;
    }

    let (flags, action) = match parse_args(args) {
        Ok(parsed) => parsed,
        Err(err) => {
            eprintln!("error: {}\n\n{}", err, HELP);
            return ExitCode::from(2);
        }
    };

    let outcome = match action {
        Action::Show => app::start(&flags).map(|startup| {
            if let Some(warning) = startup.config_warning {
                eprintln!("warning: {}", warning);
            }
            let translation = startup.translation;
            println!("locale: {}", translation.locale());
            println!("fallback-locale: {}", translation.fallback_locale());
            let tags: Vec<&str> = translation.messages().keys().map(|t| t.as_str()).collect();
            println!("messages: {}", tags.join(", "));
        }),
        Action::SetLanguage(tag) => app::change_language(&flags, &tag).map(|locale| {
            println!("preferred-language: {}", locale);
        }),
        Action::ClearLanguage => app::clear_language(&flags),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn parse_args(mut args: pico_args::Arguments) -> Result<(Flags, Action), pico_args::Error> {
    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        validate_stored: args.contains("--validate-stored"),
        platform: args.opt_value_from_str("--platform")?,
    };

    let action = if let Some(tag) = args.opt_value_from_str::<_, String>("--set-lang")? {
        Action::SetLanguage(tag)
    } else if args.contains("--clear-lang") {
        Action::ClearLanguage
    } else {
        Action::Show
    };

    let remaining = args.finish();
    if let Some(extra) = remaining.first() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected argument {:?}", extra),
        });
    }

    Ok((flags, action))
}
