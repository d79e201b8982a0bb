use std::any::{TypeId, type_name};
use std::collections::HashMap;

use crate::{Error, State};

/// Owner of every registered [`State`].
///
/// Each state type is registered once and then read or updated through
/// `&self`/`&mut self`, so there is a single writer per state at any time.
#[derive(Default)]
pub struct StateCtx {
    states: HashMap<TypeId, Box<dyn State>>,
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.states.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a state, replacing a previous value of the same type.
    pub fn add_state<T: State>(&mut self, state: T) {
        if self
            .states
            .insert(TypeId::of::<T>(), Box::new(state))
            .is_some()
        {
            log::debug!("Replaced registered state {}", type_name::<T>());
        }
    }

    /// Registers a state, failing when one of the same type already exists.
    pub fn try_add_state<T: State>(&mut self, state: T) -> Result<(), Error> {
        if self.contains::<T>() {
            return Err(Error::StateAlreadyRegistered {
                type_name: type_name::<T>(),
            });
        }
        self.states.insert(TypeId::of::<T>(), Box::new(state));
        Ok(())
    }

    pub fn contains<T: State>(&self) -> bool {
        self.states.contains_key(&TypeId::of::<T>())
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "read"))
    }

    pub fn try_state_mut<T: State>(&mut self) -> Result<&mut T, Error> {
        self.states
            .get_mut(&TypeId::of::<T>())
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .ok_or_else(|| Error::state_not_found(type_name::<T>(), "write"))
    }

    /// Reads a registered state.
    ///
    /// # Panics
    ///
    /// Panics when `T` was never registered with [`StateCtx::add_state`].
    pub fn state<T: State>(&self) -> &T {
        match self.try_state::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// Mutably borrows a registered state.
    ///
    /// # Panics
    ///
    /// Panics when `T` was never registered with [`StateCtx::add_state`].
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        match self.try_state_mut::<T>() {
            Ok(state) => state,
            Err(err) => panic!("{err}"),
        }
    }

    /// Applies `f` to a registered state.
    ///
    /// # Panics
    ///
    /// Panics when `T` was never registered with [`StateCtx::add_state`].
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}
