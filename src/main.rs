use azure_rg_list::azure::get_access_token;
use azure_rg_list::config::Config;
use azure_rg_list::list_resource_groups;
use azure_rg_list::output::write_error;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        eprintln!("Logging disabled, could not load log4rs.yml: {e}");
    }
    dotenv::dotenv().ok();
    log::info!("#Start main()");

    let config = Config::from_env();
    let mut stdout = std::io::stdout();

    match list_resource_groups(&config, get_access_token, &mut stdout).await {
        Ok(groups) => {
            log::info!("#End main() listed {} resource groups", groups.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Reported on stdout, keep it off the stderr appender.
            log::debug!("{}: {e:?}", e.step());
            if let Err(io) = write_error(&mut stdout, &e) {
                eprintln!("{}: {e} ({io})", e.step());
            }
            ExitCode::FAILURE
        }
    }
}
