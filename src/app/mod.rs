// Application wiring for the two programs.

pub mod services;

use crate::adapters::console::SharedConsole;
use crate::config::Settings;
use crate::core::calculator::SimpleCalculator;
use crate::core::session::{ErrorReporting, Session};
use crate::domain::model::Outcome;
use crate::domain::ports::{Calculator, Logger};
use crate::utils::error::Result;
use std::io::{BufRead, Write};
use std::rc::Rc;

/// Plain program: the calculator is constructed directly and errors are printed as-is.
pub fn run_direct<R, W>(input: R, console: SharedConsole<W>, settings: &Settings) -> Outcome
where
    R: BufRead,
    W: Write,
{
    let calculator: Rc<dyn Calculator> = Rc::new(SimpleCalculator);
    let mut session = Session::new(
        input,
        console,
        calculator,
        ErrorReporting::Plain,
        settings.session_options(),
    );
    session.run()
}

/// Container program: calculator and logger come from the service provider and
/// errors go through the logger.
pub fn run_with_container<R, W>(
    input: R,
    console: SharedConsole<W>,
    settings: &Settings,
) -> Result<Outcome>
where
    R: BufRead,
    W: Write + 'static,
{
    let provider = services::configure_services(console.clone(), settings).build_service_provider();
    tracing::debug!("Registered services: {:?}", provider.registered_services());

    let calculator = provider.get_required_service::<dyn Calculator>()?;
    let logger = provider.get_required_service::<dyn Logger>()?;

    let mut session = Session::new(
        input,
        console,
        calculator,
        ErrorReporting::Logger(logger),
        settings.session_options(),
    );
    Ok(session.run())
}
