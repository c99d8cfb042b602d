use core::fmt;

bitflags::bitflags! {
    /// Read / write capability flags of a property.
    ///
    /// The flags are authoritative: a property only hands out the
    /// accessors its flags allow, whatever handles it carries.
    ///
    /// # Examples
    ///
    /// ```
    /// use vc_property::info::PropertyAccess;
    ///
    /// let access = PropertyAccess::READ;
    /// assert!(access.can_read());
    /// assert!(!access.can_write());
    /// assert!(PropertyAccess::READ_WRITE.can_write());
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PropertyAccess: u8 {
        /// The property value can be read.
        const READ = 1 << 0;
        /// The property value can be written.
        const WRITE = 1 << 1;
        /// Both read and write.
        const READ_WRITE = Self::READ.bits() | Self::WRITE.bits();
    }
}

impl PropertyAccess {
    /// Returns `true` if the property value can be read.
    #[inline]
    pub const fn can_read(self) -> bool {
        self.contains(Self::READ)
    }

    /// Returns `true` if the property value can be written.
    #[inline]
    pub const fn can_write(self) -> bool {
        self.contains(Self::WRITE)
    }
}

impl fmt::Debug for PropertyAccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.can_read(), self.can_write()) {
            (true, true) => f.write_str("ReadWrite"),
            (true, false) => f.write_str("ReadOnly"),
            (false, true) => f.write_str("WriteOnly"),
            (false, false) => f.write_str("None"),
        }
    }
}
