//! [`Handler`] abstractions.

/// Executable handler.
///
/// Execution is synchronous and takes the [`Handler`] by `&mut`: every
/// handler in this system mutates state it exclusively owns, with no
/// suspension points.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    fn execute(&mut self, args: Args) -> Result<Self::Ok, Self::Err>;
}
