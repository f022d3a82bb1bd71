// Shared enums

/// Continue/stop signal returned by rule listeners.
///
/// Affix rule application and suggestion generation are depth-first
/// enumerations. Every callback answers whether the enumeration should go on;
/// a `Stop` is propagated straight up the call chain without visiting the
/// remaining rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    /// Keep enumerating.
    Continue,
    /// Abort the enumeration.
    Stop,
}

impl Flow {
    /// Returns `true` for [`Flow::Stop`].
    #[inline]
    pub fn is_stop(self) -> bool {
        self == Flow::Stop
    }

    /// `Continue` while `keep_going` holds, `Stop` otherwise.
    #[inline]
    pub fn continue_if(keep_going: bool) -> Self {
        if keep_going { Flow::Continue } else { Flow::Stop }
    }
}
