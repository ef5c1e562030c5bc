/// Short, human-readable name of a type, without module paths.
///
/// `std::num::ParseIntError` becomes `ParseIntError`,
/// `Vec<alloc::string::String>` becomes `Vec<String>`.
pub(crate) fn simplified_typename<T: ?Sized>() -> String {
    tynm::type_name::<T>()
}
