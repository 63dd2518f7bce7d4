use crate::utils::error::{AppError, Result};
use std::any::{type_name, Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

type Factory<T> = Box<dyn Fn(&ServiceProvider) -> Result<Rc<T>>>;

struct Registration {
    service: &'static str,
    // Holds a `Factory<T>` for the `TypeId` it is keyed by.
    factory: Box<dyn Any>,
}

/// Registrations of transient services, keyed by service type.
///
/// The service type may be unsized, so trait objects register directly:
/// `add_transient::<dyn Calculator>(...)`.
#[derive(Default)]
pub struct ServiceCollection {
    registrations: HashMap<TypeId, Registration>,
}

impl ServiceCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory invoked on every resolution. Replaces an earlier registration for `T`.
    pub fn add_transient<T, F>(mut self, factory: F) -> Self
    where
        T: ?Sized + 'static,
        F: Fn(&ServiceProvider) -> Result<Rc<T>> + 'static,
    {
        let factory: Factory<T> = Box::new(factory);
        let service = type_name::<T>();
        if self
            .registrations
            .insert(
                TypeId::of::<T>(),
                Registration {
                    service,
                    factory: Box::new(factory),
                },
            )
            .is_some()
        {
            tracing::debug!(service, "Replaced existing registration");
        }
        self
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn build_service_provider(self) -> ServiceProvider {
        ServiceProvider {
            registrations: self.registrations,
            resolving: RefCell::new(Vec::new()),
        }
    }
}

pub struct ServiceProvider {
    registrations: HashMap<TypeId, Registration>,
    resolving: RefCell<Vec<TypeId>>,
}

impl ServiceProvider {
    /// Builds a fresh instance of `T`, resolving its dependencies through this provider.
    pub fn get_required_service<T: ?Sized + 'static>(&self) -> Result<Rc<T>> {
        let id = TypeId::of::<T>();
        let service = type_name::<T>();

        let factory = self
            .registrations
            .get(&id)
            .and_then(|registration| registration.factory.downcast_ref::<Factory<T>>())
            .ok_or(AppError::ServiceNotRegistered { service })?;

        if self.resolving.borrow().contains(&id) {
            return Err(AppError::CircularDependency { service });
        }

        self.resolving.borrow_mut().push(id);
        let instance = factory(self);
        self.resolving.borrow_mut().pop();

        tracing::debug!(service, ok = instance.is_ok(), "Resolved transient service");
        instance
    }

    /// Like [`get_required_service`](Self::get_required_service) but yields `None` on failure.
    pub fn get_service<T: ?Sized + 'static>(&self) -> Option<Rc<T>> {
        match self.get_required_service::<T>() {
            Ok(instance) => Some(instance),
            Err(e) => {
                tracing::warn!("Service resolution failed: {}", e);
                None
            }
        }
    }

    pub fn registered_services(&self) -> Vec<&'static str> {
        let mut services: Vec<_> = self
            .registrations
            .values()
            .map(|registration| registration.service)
            .collect();
        services.sort_unstable();
        services
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    trait Greeter {
        fn greet(&self) -> String;
    }

    struct Fixed(&'static str);

    impl Greeter for Fixed {
        fn greet(&self) -> String {
            self.0.to_string()
        }
    }

    struct Loud {
        inner: Rc<dyn Greeter>,
    }

    impl Greeter for Loud {
        fn greet(&self) -> String {
            self.inner.greet().to_uppercase()
        }
    }

    #[test]
    fn test_resolves_trait_object() {
        let provider = ServiceCollection::new()
            .add_transient::<dyn Greeter, _>(|_| Ok(Rc::new(Fixed("hi"))))
            .build_service_provider();

        let greeter = provider.get_required_service::<dyn Greeter>().unwrap();
        assert_eq!(greeter.greet(), "hi");
    }

    #[test]
    fn test_transient_builds_new_instance_each_time() {
        let built = Rc::new(Cell::new(0));
        let counter = built.clone();
        let provider = ServiceCollection::new()
            .add_transient::<Fixed, _>(move |_| {
                counter.set(counter.get() + 1);
                Ok(Rc::new(Fixed("x")))
            })
            .build_service_provider();

        let first = provider.get_required_service::<Fixed>().unwrap();
        let second = provider.get_required_service::<Fixed>().unwrap();
        assert!(!Rc::ptr_eq(&first, &second));
        assert_eq!(built.get(), 2);
    }

    #[test]
    fn test_factory_can_resolve_dependencies() {
        let provider = ServiceCollection::new()
            .add_transient::<Loud, _>(|p| {
                Ok(Rc::new(Loud {
                    inner: p.get_required_service::<dyn Greeter>()?,
                }))
            })
            .add_transient::<dyn Greeter, _>(|_| Ok(Rc::new(Fixed("hey"))))
            .build_service_provider();

        assert_eq!(provider.get_required_service::<Loud>().unwrap().greet(), "HEY");
    }

    #[test]
    fn test_missing_service() {
        let provider = ServiceCollection::new().build_service_provider();

        assert!(provider.get_service::<dyn Greeter>().is_none());
        match provider.get_required_service::<dyn Greeter>() {
            Err(AppError::ServiceNotRegistered { service }) => assert!(service.contains("Greeter")),
            _ => panic!("expected ServiceNotRegistered"),
        }
    }

    #[test]
    fn test_later_registration_wins() {
        let collection = ServiceCollection::new()
            .add_transient::<dyn Greeter, _>(|_| Ok(Rc::new(Fixed("first"))))
            .add_transient::<dyn Greeter, _>(|_| Ok(Rc::new(Fixed("second"))));
        assert_eq!(collection.len(), 1);

        let provider = collection.build_service_provider();
        assert_eq!(provider.get_required_service::<dyn Greeter>().unwrap().greet(), "second");
    }

    #[test]
    fn test_cycle_is_reported() {
        let provider = ServiceCollection::new()
            .add_transient::<Loud, _>(|p| {
                let inner = p.get_required_service::<dyn Greeter>()?;
                Ok(Rc::new(Loud { inner }))
            })
            .add_transient::<dyn Greeter, _>(|p| {
                let loud: Rc<dyn Greeter> = p.get_required_service::<Loud>()?;
                Ok(loud)
            })
            .build_service_provider();

        assert!(matches!(
            provider.get_required_service::<Loud>(),
            Err(AppError::CircularDependency { .. })
        ));
        // The resolution stack is unwound after a failure.
        assert!(provider.resolving.borrow().is_empty());
    }
}
