// src/internal/logger/macros.rs

/// Format and emit on a channel, `printf`-style.
///
/// ```
/// let channels = chanlog::LogChannels::silent();
/// chanlog::log_printf!(channels.info(), "loaded {} entries", 12);
/// ```
#[macro_export]
macro_rules! log_printf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.printf(format_args!($($arg)*))
    };
}

/// Emit values separated by spaces.
///
/// ```
/// let channels = chanlog::LogChannels::silent();
/// chanlog::log_println!(channels.warning(), "retrying", 3, "times");
/// ```
#[macro_export]
macro_rules! log_println {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        $logger.println(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Path of the enclosing function, resolved at compile time.
///
/// Inside a closure the path ends in `::{{closure}}`.
///
/// ```
/// fn load() -> &'static str {
///     chanlog::function_name!()
/// }
/// assert!(load().ends_with("::load"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __type_name_of(__here);
        name.strip_suffix("::__here").unwrap_or(name)
    }};
}

/// Emit `=> <function>` for the enclosing function.
///
/// ```
/// fn load(channels: &chanlog::LogChannels) {
///     chanlog::log_enter!(channels.trace());
///     chanlog::log_leave!(channels.trace());
/// }
/// load(&chanlog::LogChannels::silent());
/// ```
#[macro_export]
macro_rules! log_enter {
    ($logger:expr) => {
        $logger.enter_named($crate::function_name!())
    };
}

/// Emit `=> <function> (<description>)` for the enclosing function.
#[macro_export]
macro_rules! log_enter_anon {
    ($logger:expr, $description:expr) => {
        $logger.enter_named_anon($crate::function_name!(), $description)
    };
}

/// Emit `<= <function>` for the enclosing function.
#[macro_export]
macro_rules! log_leave {
    ($logger:expr) => {
        $logger.leave_named($crate::function_name!())
    };
}

/// Emit `<= <function> (<description>)` for the enclosing function.
#[macro_export]
macro_rules! log_leave_anon {
    ($logger:expr, $description:expr) => {
        $logger.leave_named_anon($crate::function_name!(), $description)
    };
}
