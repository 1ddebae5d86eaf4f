/// Log through `tracing` only when the scope's configured level allows it.
#[macro_export]
macro_rules! scoped_log {
    ($level:ident, $scope:expr, $($arg:tt)*) => {{
        let log_config = $crate::logging::get_log_config();
        if log_config.should_log($scope, $crate::logging::Level::$level) {
            $crate::logging::tracing::event!(
                $crate::logging::Level::$level,
                scope = $scope,
                $($arg)*
            );
        }
    }};
}

#[macro_export]
macro_rules! physics_log {
    ($level:ident, $($arg:tt)*) => {
        $crate::scoped_log!($level, "physics", $($arg)*)
    };
}

#[macro_export]
macro_rules! audio_log {
    ($level:ident, $($arg:tt)*) => {
        $crate::scoped_log!($level, "audio", $($arg)*)
    };
}

#[macro_export]
macro_rules! game_log {
    ($level:ident, $($arg:tt)*) => {
        $crate::scoped_log!($level, "game", $($arg)*)
    };
}

#[macro_export]
macro_rules! input_log {
    ($level:ident, $($arg:tt)*) => {
        $crate::scoped_log!($level, "input", $($arg)*)
    };
}
