//! Factory catalog: ordered libraries of component factories
//!
//! The catalog is built once per process from the built-in libraries and is
//! read-only afterwards. Library position in load order is the `lib` index
//! written into serialized output, so the order here is part of the format.

pub mod builtin;
pub mod factory;

pub use factory::{ComponentFactory, ComponentInstance};

/// A named, ordered collection of component factories.
pub struct Library {
    pub name: String,
    pub factories: Vec<Box<dyn ComponentFactory>>,
}

impl Library {
    pub fn new(name: impl Into<String>, factories: Vec<Box<dyn ComponentFactory>>) -> Self {
        Self {
            name: name.into(),
            factories,
        }
    }
}

/// A successful lookup: the factory plus its owning library and that
/// library's position in catalog load order.
pub struct FactoryMatch<'a> {
    pub library_index: usize,
    pub library: &'a Library,
    pub factory: &'a dyn ComponentFactory,
}

/// The ordered set of libraries loaded for this process.
pub struct Catalog {
    libraries: Vec<Library>,
}

impl Catalog {
    pub fn new(libraries: Vec<Library>) -> Self {
        Self { libraries }
    }

    /// The built-in libraries in their fixed load order.
    pub fn builtin() -> Self {
        Self::new(builtin::libraries())
    }

    pub fn libraries(&self) -> &[Library] {
        &self.libraries
    }

    /// Case-insensitive lookup by canonical or display name. Iterates
    /// libraries then factories in load order; the first match wins.
    pub fn find(&self, name: &str) -> Option<FactoryMatch<'_>> {
        for (library_index, library) in self.libraries.iter().enumerate() {
            for factory in &library.factories {
                if factory.name().eq_ignore_ascii_case(name)
                    || factory.display_name().eq_ignore_ascii_case(name)
                {
                    return Some(FactoryMatch {
                        library_index,
                        library,
                        factory: factory.as_ref(),
                    });
                }
            }
        }
        None
    }

    /// Every factory display name, sorted case-insensitively. Used for
    /// diagnostics when a lookup fails.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .libraries
            .iter()
            .flat_map(|lib| lib.factories.iter().map(|f| f.display_name().to_string()))
            .collect();
        names.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()));
        names
    }
}
