//! Lexically scoped environments.
//!
//! An [`Env`] is a handle to one scope; scopes link to their parent,
//! forming a chain that ends at the root. Ordinary block scopes are created
//! with [`Env::push`] and dropped when their frame ends. Closures clone the
//! handle of their defining scope, which keeps the whole chain above it alive
//! for as long as the closure value is reachable.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::Expr;

/// Failure modes of [`Env::define`] and [`Env::rebind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindError {
    /// The name is already bound in this exact scope.
    AlreadyBound,
    /// The name is not bound anywhere in the chain.
    Undefined,
}

impl fmt::Display for BindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindError::AlreadyBound => f.write_str("already bound in this scope"),
            BindError::Undefined => f.write_str("not found in any accessible environment"),
        }
    }
}

/// Single-threaded shared cell used for scopes.
///
/// All scope allocation goes through [`LocalScope::new`]. `Rc` rather than
/// `Arc`: the interpreter runs on one thread.
#[repr(transparent)]
pub(crate) struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

/// Bindings of one lexical block.
#[derive(Default)]
pub(crate) struct Scope {
    bindings: FxHashMap<String, Expr>,
    parent: Option<Env>,
}

impl Scope {
    /// Names bound directly in this scope, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Handle to a scope in the chain. Cloning the handle shares the scope.
#[derive(Clone)]
pub struct Env {
    scope: LocalScope<Scope>,
}

impl Env {
    /// A fresh root scope with no parent.
    pub fn root() -> Self {
        Env {
            scope: LocalScope::new(Scope::default()),
        }
    }

    /// Create a child scope of `self` and return its handle.
    pub fn push(&self) -> Env {
        Env {
            scope: LocalScope::new(Scope {
                bindings: FxHashMap::default(),
                parent: Some(self.clone()),
            }),
        }
    }

    /// The parent scope, or `None` at the root.
    pub fn pop(&self) -> Option<Env> {
        self.scope.borrow().parent.clone()
    }

    /// Bind `name` in this scope.
    ///
    /// Shadowing a binding from an enclosing scope is allowed; rebinding a
    /// name this scope already owns is not.
    pub fn define(&self, name: &str, value: Expr) -> Result<(), BindError> {
        let mut scope = self.scope.borrow_mut();
        if scope.bindings.contains_key(name) {
            return Err(BindError::AlreadyBound);
        }
        scope.bindings.insert(name.to_owned(), value);
        Ok(())
    }

    /// Look `name` up in this scope, and in its ancestors when
    /// `search_parent` is set.
    pub fn lookup(&self, name: &str, search_parent: bool) -> Option<Expr> {
        let mut current = self.clone();
        loop {
            let parent = {
                let scope = current.scope.borrow();
                if let Some(value) = scope.bindings.get(name) {
                    return Some(value.clone());
                }
                if !search_parent {
                    return None;
                }
                scope.parent.clone()
            };
            current = parent?;
        }
    }

    pub fn contains(&self, name: &str, search_parent: bool) -> bool {
        self.owner_of(name, search_parent).is_some()
    }

    /// Replace the value of `name` in the closest scope that owns it.
    pub fn rebind(&self, name: &str, value: Expr) -> Result<(), BindError> {
        let owner = self.owner_of(name, true).ok_or(BindError::Undefined)?;
        owner
            .scope
            .borrow_mut()
            .bindings
            .insert(name.to_owned(), value);
        Ok(())
    }

    /// Number of scopes from here to the root, inclusive.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.pop();
        while let Some(env) = current {
            depth += 1;
            current = env.pop();
        }
        depth
    }

    /// Names bound directly in this scope, sorted.
    pub fn local_names(&self) -> Vec<String> {
        self.scope
            .borrow()
            .names()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    #[inline]
    pub fn ptr_eq(&self, other: &Env) -> bool {
        self.scope.ptr_eq(&other.scope)
    }

    fn owner_of(&self, name: &str, search_parent: bool) -> Option<Env> {
        let mut current = self.clone();
        loop {
            let parent = {
                let scope = current.scope.borrow();
                if scope.bindings.contains_key(name) {
                    drop(scope);
                    return Some(current);
                }
                if !search_parent {
                    return None;
                }
                scope.parent.clone()
            };
            current = parent?;
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Env::root()
    }
}

impl fmt::Debug for Env {
    // Bindings may hold closures that capture this env; print names only.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Env")
            .field("depth", &self.depth())
            .field("names", &self.local_names())
            .finish()
    }
}
