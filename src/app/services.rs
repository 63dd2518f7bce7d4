use crate::adapters::console::SharedConsole;
use crate::adapters::logger::ConsoleLogger;
use crate::config::Settings;
use crate::core::calculator::LoggingCalculator;
use crate::core::container::ServiceCollection;
use crate::domain::ports::{Calculator, Logger};
use std::io::Write;
use std::rc::Rc;

/// Registers the logger and the logging calculator as transient services.
pub fn configure_services<W: Write + 'static>(
    console: SharedConsole<W>,
    settings: &Settings,
) -> ServiceCollection {
    let event_color = settings.event_color;
    let error_color = settings.error_color;
    let decimal_separator = settings.decimal_separator;

    ServiceCollection::new()
        .add_transient::<dyn Calculator, _>(move |provider| {
            let logger = provider.get_required_service::<dyn Logger>()?;
            let calculator: Rc<dyn Calculator> = Rc::new(
                LoggingCalculator::with_decimal_separator(logger, decimal_separator),
            );
            Ok(calculator)
        })
        .add_transient::<dyn Logger, _>(move |_| {
            let logger: Rc<dyn Logger> = Rc::new(ConsoleLogger::with_colors(
                console.clone(),
                event_color,
                error_color,
            ));
            Ok(logger)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::Console;

    #[test]
    fn test_calculator_logs_through_registered_logger() {
        let console = Console::new(Vec::new(), false).shared();
        let provider = configure_services(console.clone(), &Settings::default()).build_service_provider();

        let calculator = provider.get_required_service::<dyn Calculator>().unwrap();
        assert_eq!(calculator.add(2.0, 3.0).unwrap(), 5.0);

        assert_eq!(
            String::from_utf8_lossy(console.borrow().get_ref()),
            "Выполняется сложение: 2 + 3\nРезультат сложения: 5\n"
        );
    }

    #[test]
    fn test_both_services_registered() {
        let console = Console::new(Vec::new(), false).shared();
        let collection = configure_services(console, &Settings::default());
        assert_eq!(collection.len(), 2);

        let provider = collection.build_service_provider();
        assert!(provider.get_service::<dyn Logger>().is_some());
        assert!(provider.get_service::<dyn Calculator>().is_some());
    }
}
