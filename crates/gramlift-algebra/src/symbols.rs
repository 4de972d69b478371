//! The variable table.
//!
//! Exponent vectors index into an ordered variable list held by the caller;
//! this module owns that list. Each variable is either a problem parameter
//! or a decision variable, an unknown of the downstream optimization
//! program. The Gram-matrix lift mints fresh decision variables through the
//! table's deterministic counter.

use std::fmt;

use rustc_hash::FxHashMap;

/// A handle to a variable in the table.
///
/// The handle doubles as the variable's position in every exponent vector.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VarId(u32);

impl VarId {
    /// Creates a handle from a raw index.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Var({})", self.0)
    }
}

impl fmt::Display for VarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Whether a variable is a fixed parameter or an optimization unknown.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum VarKind {
    /// A fixed problem parameter.
    Parameter,
    /// An unknown of the downstream optimization program.
    Decision,
}

/// An interning table of variables.
#[derive(Clone, Debug, Default)]
pub struct VarTable {
    names: Vec<String>,
    kinds: Vec<VarKind>,
    by_name: FxHashMap<String, VarId>,
    fresh_counter: u32,
}

impl VarTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns a parameter variable, returning its handle.
    ///
    /// Re-interning an existing name returns the existing handle; the kind
    /// of an existing variable is never changed.
    pub fn parameter(&mut self, name: &str) -> VarId {
        self.intern(name, VarKind::Parameter)
    }

    /// Interns a decision variable, returning its handle.
    pub fn decision(&mut self, name: &str) -> VarId {
        self.intern(name, VarKind::Decision)
    }

    /// Mints a fresh decision variable with a unique, deterministic name.
    ///
    /// Names are `{prefix}{counter}`; the counter only ever increments, so
    /// repeated lifts on the same table never collide.
    pub fn fresh_decision(&mut self, prefix: &str) -> VarId {
        loop {
            let name = format!("{prefix}{}", self.fresh_counter);
            self.fresh_counter += 1;
            if !self.by_name.contains_key(&name) {
                return self.intern(&name, VarKind::Decision);
            }
        }
    }

    fn intern(&mut self, name: &str, kind: VarKind) -> VarId {
        if let Some(&id) = self.by_name.get(name) {
            return id;
        }

        let index = self.names.len();
        assert!(index < u32::MAX as usize, "variable table capacity exceeded");

        let id = VarId::new(index as u32);
        self.names.push(name.to_string());
        self.kinds.push(kind);
        self.by_name.insert(name.to_string(), id);
        id
    }

    /// Gets the name of a variable.
    #[must_use]
    pub fn name(&self, id: VarId) -> Option<&str> {
        self.names.get(id.index()).map(String::as_str)
    }

    /// Gets the kind of a variable.
    #[must_use]
    pub fn kind(&self, id: VarId) -> Option<VarKind> {
        self.kinds.get(id.index()).copied()
    }

    /// Returns true if the variable is a decision variable.
    #[must_use]
    pub fn is_decision(&self, id: VarId) -> bool {
        self.kind(id) == Some(VarKind::Decision)
    }

    /// Returns the number of variables in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over all variables in interning order.
    pub fn iter(&self) -> impl Iterator<Item = (VarId, &str, VarKind)> + '_ {
        self.names
            .iter()
            .zip(&self.kinds)
            .enumerate()
            .map(|(i, (name, &kind))| (VarId::new(i as u32), name.as_str(), kind))
    }
}
