//! Macros for declaring state and event enums.

/// Generate a `State` trait implementation for a simple enum.
///
/// # Example
///
/// ```
/// use turnstile::state_enum;
///
/// state_enum! {
///     pub enum PlayerState {
///         Stopped,
///         Open,
///         Empty,
///         Playing,
///         Paused,
///     }
/// }
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate a payload-carrying event enum, its fieldless kind enum, and
/// the `Event` trait implementation tying them together.
///
/// The kind enum has one variant per event variant; `kind()` maps each
/// event to its tag regardless of payload contents.
///
/// # Example
///
/// ```
/// use turnstile::core::Event;
/// use turnstile::event_enum;
///
/// event_enum! {
///     pub enum PlayerEvent {
///         Play,
///         OpenClose,
///         CdDetected(String),
///         Stop,
///         Pause,
///     }
///     kind: PlayerEventKind
/// }
///
/// let event = PlayerEvent::CdDetected("louie, louie".to_string());
/// assert_eq!(event.kind(), PlayerEventKind::CdDetected);
/// assert_eq!(PlayerEvent::Play.kind(), PlayerEventKind::Play);
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(( $($payload:ty),+ $(,)? ))?
            ),* $(,)?
        }
        kind: $kind:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $(( $($payload),+ ))?
            ),*
        }

        #[derive(Copy, Clone, PartialEq, Eq, Debug)]
        $vis enum $kind {
            $($variant),*
        }

        impl $crate::core::Event for $name {
            type Kind = $kind;

            fn kind(&self) -> $kind {
                match self {
                    $(Self::$variant { .. } => $kind::$variant),*
                }
            }
        }
    };
}
