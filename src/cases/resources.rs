//! Scoped acquisition: values that release what they hold when their scope ends.

use std::cell::{Cell, RefCell};

use once_cell::unsync::Lazy;
use serde_json::json;
use tempfile::NamedTempFile;

use crate::{check, check_eq, example_case, CaseResult};

/// A named temporary file exists inside its scope and is deleted once the scope ends.
#[example_case(name = "scoped temporary file", group = "resources")]
pub fn scoped_temporary_file() -> CaseResult {
    let (path, existed_in_scope) = {
        let file = NamedTempFile::new()?;
        let path = file.path().to_path_buf();
        let existed = path.exists();
        check!(existed, "{} should exist inside its scope", path.display());
        (path, existed)
    };

    let exists_after_scope = path.exists();
    check!(!exists_after_scope, "{} should be gone after its scope", path.display());

    Ok(json!({
        "existed_in_scope": existed_in_scope,
        "exists_after_scope": exists_after_scope,
    }))
}

struct Resource {
    disposed: Cell<bool>,
}

struct Disposing<'a> {
    resource: &'a Resource,
}

impl Drop for Disposing<'_> {
    fn drop(&mut self) {
        self.resource.disposed.set(true);
    }
}

struct Named<'a> {
    name: &'static str,
    log: &'a RefCell<Vec<&'static str>>,
}

impl Drop for Named<'_> {
    fn drop(&mut self) {
        self.log.borrow_mut().push(self.name);
    }
}

/// Leaving a scope disposes what it owns, in reverse order of creation.
#[example_case(name = "disposal at scope end", group = "resources")]
pub fn disposal_at_scope_end() -> CaseResult {
    let resource = Resource {
        disposed: Cell::new(false),
    };
    {
        let _guard = Disposing {
            resource: &resource,
        };
        check!(!resource.disposed.get());
    }
    check!(resource.disposed.get());

    let log = RefCell::new(Vec::new());
    {
        let _first = Named { name: "first", log: &log };
        let _second = Named { name: "second", log: &log };
    }
    let order = log.into_inner();
    check_eq!(order, vec!["second", "first"]);

    Ok(json!(order))
}

struct ExpensiveConstruction {
    is_setup: bool,
}

/// A lazily initialised value is only built on first access, and only once.
#[example_case(group = "resources")]
pub fn lazy_instantiation() -> CaseResult {
    let constructions = Cell::new(0);
    let lazy = Lazy::new(|| {
        constructions.set(constructions.get() + 1);
        ExpensiveConstruction { is_setup: true }
    });

    check!(Lazy::get(&lazy).is_none(), "nothing is built before first access");
    check_eq!(constructions.get(), 0);

    check!(lazy.is_setup);
    check!(lazy.is_setup);
    check_eq!(constructions.get(), 1);

    Ok(json!(constructions.get()))
}
