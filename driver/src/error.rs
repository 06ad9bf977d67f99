use kernel::KernelError;

/// Lifts a backend error into a [`KernelError`] report, keeping the original
/// error as the report's source frame.
pub trait ConvertError {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}
