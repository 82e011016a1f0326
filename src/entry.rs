use std::io::IsTerminal;
use std::sync::Arc;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::app::{run_dashboard, run_headless};
use crate::args::{OutputFormat, ProbeArgs};
use crate::config::{apply_config, load_config, resolve_base_url, resolve_requests};
use crate::error::AppResult;
use crate::http::{BaseUrl, Harness, RequestPort, ReqwestPort};
use crate::shutdown::{setup_signal_shutdown_handler, shutdown_channel};

enum RunPlan {
    Dashboard {
        harnesses: Vec<Harness>,
        base_url: BaseUrl,
        no_color: bool,
    },
    Headless {
        harnesses: Vec<Harness>,
        output_format: OutputFormat,
        fail_on_error: bool,
    },
}

pub(crate) fn run() -> AppResult<()> {
    let matches = ProbeArgs::command().get_matches();
    let mut args = ProbeArgs::from_arg_matches(&matches)?;
    merge_config(&mut args, &matches)?;

    if !args.no_ui && !std::io::stdout().is_terminal() {
        args.no_ui = true;
    }

    crate::logger::init_logging(args.verbose, args.no_color, !args.no_ui);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args))
}

fn merge_config(args: &mut ProbeArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(args, matches, config)?;
    }
    Ok(())
}

async fn run_async(args: ProbeArgs) -> AppResult<()> {
    let plan = build_plan(&args)?;
    let port: Arc<dyn RequestPort> = Arc::new(ReqwestPort::new()?);
    let (shutdown_tx, _) = shutdown_channel();
    let signals = setup_signal_shutdown_handler(&shutdown_tx);

    let outcome = match plan {
        RunPlan::Dashboard {
            harnesses,
            base_url,
            no_color,
        } => run_dashboard(harnesses, port, &base_url, no_color, &shutdown_tx).await,
        RunPlan::Headless {
            harnesses,
            output_format,
            fail_on_error,
        } => run_headless(harnesses, port, output_format, fail_on_error, &shutdown_tx).await,
    };

    drop(shutdown_tx.send(()));
    if let Err(err) = signals.await {
        tracing::debug!("Signal handler ended abnormally: {}", err);
    }
    outcome
}

fn build_plan(args: &ProbeArgs) -> AppResult<RunPlan> {
    let base_url = resolve_base_url(args)?;
    let harnesses = resolve_requests(args)?
        .into_iter()
        .map(|spec| Harness::new(spec, &base_url))
        .collect::<AppResult<Vec<_>>>()?;
    tracing::info!(
        "Prepared {} request(s) against {}",
        harnesses.len(),
        base_url
    );

    if args.no_ui {
        return Ok(RunPlan::Headless {
            harnesses,
            output_format: args.output_format,
            fail_on_error: args.fail_on_error,
        });
    }

    Ok(RunPlan::Dashboard {
        harnesses,
        base_url,
        no_color: args.no_color,
    })
}
