use std::any::Any;

/// A single owned piece of application state stored in a [`crate::StateCtx`].
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}
