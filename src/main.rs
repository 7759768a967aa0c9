use anyhow::Result;
use tracing::info;

use enzyme_damage::proteomic::tasks::server::{self, ServerArguments, ServerState};
use enzyme_damage::proteomic::utility::logger;

fn main() -> Result<()> {
    // a missing .env is fine, PORT may come from the real environment or not at all
    dotenv::dotenv().ok();
    logger::init_tracing();

    let cli_args = ServerArguments::build_cli().get_matches();
    let server_args = ServerArguments::from_cli_args(&cli_args)?;

    // built before the runtime starts because the record search client blocks
    let analyzer = server::build_analyzer(&server_args)?;
    let state = ServerState::new(analyzer, server_args.get_request_timeout());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(server_args.get_thread_count().max(1))
        .enable_all()
        .build()?;
    info!(threads = server_args.get_thread_count(), "starting runtime");
    return runtime.block_on(server::serve(server_args.get_port(), state));
}
