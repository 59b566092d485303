//! Registry of generated types.
//!
//! Each qualified name is generated at most once per run. Entries are kept
//! in insertion order, are never replaced, and are only removed by rolling
//! back to a [`Checkpoint`] after a failed run.

use crate::error::{CodegenError, Result};
use pojogen_core::{ClassName, TypeSpec};
use std::collections::{HashMap, HashSet};

/// Position in the registry that can be rolled back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Memoizing store of generated type definitions keyed by qualified name.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    entries: Vec<(ClassName, TypeSpec)>,
    index: HashMap<ClassName, usize>,
    /// Names whose generation has started but not finished.
    pending: HashSet<ClassName>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no types are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if a type with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &ClassName) -> bool {
        self.index.contains_key(name)
    }

    /// Looks up a registered type.
    #[must_use]
    pub fn get(&self, name: &ClassName) -> Option<&TypeSpec> {
        self.index.get(name).map(|&idx| &self.entries[idx].1)
    }

    /// Iterates over registered types in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&ClassName, &TypeSpec)> {
        self.entries.iter().map(|(name, spec)| (name, spec))
    }

    /// Iterates over registered names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &ClassName> {
        self.entries.iter().map(|(name, _)| name)
    }

    /// Consumes the registry, returning its entries in insertion order.
    #[must_use]
    pub fn into_entries(self) -> Vec<(ClassName, TypeSpec)> {
        self.entries
    }

    /// Returns the registered type, generating it first if needed.
    ///
    /// `generator` receives the simple name and runs only when `name` is
    /// not registered yet. If it fails, nothing is registered.
    ///
    /// # Errors
    /// Returns the generator's error, or `CyclicType` if `name` is already
    /// being generated.
    pub fn get_or_create<F>(&mut self, name: ClassName, generator: F) -> Result<&TypeSpec>
    where
        F: FnOnce(&str) -> Result<TypeSpec>,
    {
        if let Some(&idx) = self.index.get(&name) {
            tracing::trace!("registry hit for {}", name);
            return Ok(&self.entries[idx].1);
        }

        let checkpoint = self.begin(&name)?;
        let result = generator(name.simple_name());
        self.finish(name, checkpoint, result)
    }

    /// Marks `name` as being generated.
    ///
    /// Returns the checkpoint [`finish`](Self::finish) rolls back to if
    /// generation fails.
    ///
    /// # Errors
    /// Returns `CyclicType` if generation of `name` is already in progress.
    pub(crate) fn begin(&mut self, name: &ClassName) -> Result<Checkpoint> {
        if !self.pending.insert(name.clone()) {
            return Err(CodegenError::CyclicType {
                name: name.canonical_name(),
            });
        }
        Ok(self.checkpoint())
    }

    /// Completes generation started with [`begin`](Self::begin).
    ///
    /// On success the definition is stored. On failure every type
    /// registered since `checkpoint` is dropped, so a failed generator
    /// leaves none of its inline types behind.
    pub(crate) fn finish(
        &mut self,
        name: ClassName,
        checkpoint: Checkpoint,
        result: Result<TypeSpec>,
    ) -> Result<&TypeSpec> {
        self.pending.remove(&name);
        let spec = match result {
            Ok(spec) => spec,
            Err(err) => {
                self.discard(&name, checkpoint, &err);
                return Err(err);
            }
        };

        tracing::debug!("registered generated type {}", name);
        let idx = self.entries.len();
        self.index.insert(name.clone(), idx);
        self.entries.push((name, spec));
        Ok(&self.entries[idx].1)
    }

    /// Rolls back to `checkpoint` after a failed run of `name`.
    pub(crate) fn discard(&mut self, name: &ClassName, checkpoint: Checkpoint, err: &CodegenError) {
        let removed = self.rollback(checkpoint);
        if removed > 0 {
            tracing::warn!(
                "generation of {} failed, rolled back {} type(s): {}",
                name,
                removed,
                err
            );
        }
    }

    /// Returns the current position for a later [`rollback`](Self::rollback).
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.entries.len())
    }

    /// Removes every entry registered after `checkpoint`.
    ///
    /// Returns the number of removed entries.
    pub fn rollback(&mut self, checkpoint: Checkpoint) -> usize {
        let keep = checkpoint.0.min(self.entries.len());
        let removed: Vec<_> = self.entries.drain(keep..).collect();
        for (name, _) in &removed {
            self.index.remove(name);
        }
        removed.len()
    }
}

impl<'a> IntoIterator for &'a TypeRegistry {
    type Item = (&'a ClassName, &'a TypeSpec);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
