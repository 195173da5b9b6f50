//! Turning date-times into text, either in their fixed forms or through a
//! pattern.

pub(crate) mod iso;

#[cfg(feature = "format")] pub(crate) mod custom;
#[cfg(feature = "format")] pub(crate) mod locale;
