//! Register-level description of the EFR32 MODEM peripheral
//!
//! Every supported chip revision has its own module ([`efr32xg1`],
//! [`efr32xg14`], [`efr32xg22`]) with one type per register. Each register
//! type comes with a module of the same name, in lower case, which contains
//! typed `R` and `W` views with one method per field. The same information is
//! available at runtime through [`RegisterMap`], which is what the
//! [calculator] uses, as register layouts differ between revisions.
//!
//! Register values are not written to hardware directly. They are collected
//! in a [`RegisterImage`], which records which registers were written, and
//! can then be turned into a [write sequence].
//!
//! **NOTE**: Field write methods accept types that may have a larger number
//! of bits than the field actually consists of. If you use such a method to
//! pass a value that is too large to be written to the field, it will be
//! silently truncated.
//!
//! [calculator]: ../calc/index.html
//! [write sequence]: ../sequence/index.html

use core::{fmt, marker::PhantomData};

use crate::{
    fmt::{trace, warn},
    Error,
};

pub mod efr32xg1;
pub mod efr32xg14;
pub mod efr32xg22;

/// Name of the peripheral all tables in this module describe
pub const BLOCK_NAME: &str = "MODEM";

/// Number of 32-bit words a [`RegisterImage`] can hold
///
/// Large enough for the biggest register map, including the modem RAM of
/// EFR32xG1.
pub const IMAGE_WORDS: usize = 512;

/// Access mode of a register or field
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Access {
    /// Status, written by hardware only
    ReadOnly,
    /// Configuration
    ReadWrite,
    /// Commands and interrupt flag set/clear
    WriteOnly,
}

impl Access {
    /// Whether software can read the value back
    pub fn is_readable(self) -> bool {
        !matches!(self, Access::WriteOnly)
    }

    /// Whether software can write the value
    pub fn is_writable(self) -> bool {
        !matches!(self, Access::ReadOnly)
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Access::ReadOnly => write!(f, "read-only"),
            Access::ReadWrite => write!(f, "read-write"),
            Access::WriteOnly => write!(f, "write-only"),
        }
    }
}

/// A named bit range within a register
///
/// Descriptors are generated from the register tables and never change at
/// runtime. `bit_width` is always at least 1 and
/// `bit_offset + bit_width <= 32`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldDescriptor {
    /// Name of the register this field belongs to
    pub register: &'static str,
    /// Name of the field
    pub name: &'static str,
    /// Access mode
    pub access: Access,
    /// Position of the least significant bit
    pub bit_offset: u8,
    /// Number of bits
    pub bit_width: u8,
}

impl FieldDescriptor {
    /// Largest value the field can hold
    pub const fn max_value(&self) -> u32 {
        u32::MAX >> (32 - self.bit_width as u32)
    }

    /// The bits of a register word occupied by this field
    pub const fn mask(&self) -> u32 {
        self.max_value() << self.bit_offset
    }

    /// Position of the most significant bit
    pub const fn last_bit(&self) -> u8 {
        self.bit_offset + self.bit_width - 1
    }

    /// Extracts the field value from a register word
    pub const fn extract(&self, word: u32) -> u32 {
        (word & self.mask()) >> self.bit_offset
    }

    /// Replaces the field in a register word
    ///
    /// Bits of `value` that don't fit into the field are dropped.
    pub const fn insert(&self, word: u32, value: u32) -> u32 {
        (word & !self.mask()) | ((value << self.bit_offset) & self.mask())
    }
}

/// A register, or an array of identical registers
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RegisterDescriptor {
    /// Register name
    ///
    /// Arrays are named after their elements with the index removed, so
    /// `RAM0_RAMDATA` to `RAM255_RAMDATA` are described by `RAM_RAMDATA`.
    pub name: &'static str,
    /// Offset of the first element from the peripheral's base address
    pub offset: u16,
    /// Access mode
    pub access: Access,
    /// Value after reset
    pub reset: u32,
    /// Bits that are implemented
    pub mask: u32,
    /// Number of elements, 1 for plain registers
    pub count: u16,
    /// Distance between array elements, in bytes
    pub stride: u16,
    /// Fields, ordered by bit offset
    ///
    /// Empty if the layout of the register is not known for this revision.
    pub fields: &'static [FieldDescriptor],
}

impl RegisterDescriptor {
    /// Looks up a field by name
    pub fn field(&self, name: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Whether this describes more than one register
    pub fn is_array(&self) -> bool {
        self.count > 1
    }

    /// Offset of an array element
    pub fn element_offset(&self, index: u16) -> Option<u16> {
        (index < self.count).then(|| self.offset + index * self.stride)
    }

    /// Returns the element index if `name` names an element of this array
    ///
    /// `RAM17_RAMDATA` is element 17 of `RAM_RAMDATA`.
    pub fn element_index(&self, name: &str) -> Option<u16> {
        if !self.is_array() {
            return None;
        }
        let split = self.name.find('_')?;
        let (prefix, suffix) = self.name.split_at(split);
        let index = name.strip_prefix(prefix)?.strip_suffix(suffix)?;
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let index: u16 = index.parse().ok()?;
        (index < self.count).then_some(index)
    }

    /// Returns the element index if `offset` falls onto an element
    pub fn index_of_offset(&self, offset: u16) -> Option<u16> {
        let distance = offset.checked_sub(self.offset)?;
        let stride = self.stride.max(1);
        if distance % stride != 0 {
            return None;
        }
        let index = distance / stride;
        (index < self.count).then_some(index)
    }
}

/// Chip revisions with a register table
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Revision {
    /// EFR32xG1 (Series 1), register layout of rev. A2/A3
    Efr32xg1,
    /// EFR32xG14 (Series 1), rev. A0
    Efr32xg14,
    /// EFR32xG22 (Series 2), rev. A1
    Efr32xg22,
}

impl Default for Revision {
    fn default() -> Self {
        Revision::Efr32xg1
    }
}

impl Revision {
    /// All revisions, oldest first
    pub const ALL: [Revision; 3] = [Revision::Efr32xg1, Revision::Efr32xg14, Revision::Efr32xg22];

    /// Family name as used in part numbers, e.g. `efr32xg14`
    pub fn family(self) -> &'static str {
        match self {
            Revision::Efr32xg1 => "efr32xg1",
            Revision::Efr32xg14 => "efr32xg14",
            Revision::Efr32xg22 => "efr32xg22",
        }
    }

    /// Looks up a revision by family name, ignoring case
    pub fn from_family(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|revision| revision.family().eq_ignore_ascii_case(name))
    }

    /// The register map of this revision
    pub fn register_map(self) -> &'static RegisterMap {
        match self {
            Revision::Efr32xg1 => &efr32xg1::REGISTER_MAP,
            Revision::Efr32xg14 => &efr32xg14::REGISTER_MAP,
            Revision::Efr32xg22 => &efr32xg22::REGISTER_MAP,
        }
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.family())
    }
}

/// One register, or one element of a register array
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RegisterRef {
    /// The register or array
    pub descriptor: &'static RegisterDescriptor,
    /// Array element, 0 for plain registers
    pub index: u16,
}

impl RegisterRef {
    /// Offset from the peripheral's base address
    pub fn offset(&self) -> u16 {
        self.descriptor.offset + self.index * self.descriptor.stride
    }

    fn word(&self) -> usize {
        self.offset() as usize / 4
    }
}

impl fmt::Display for RegisterRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.descriptor.is_array() {
            write!(f, "{}[{}]", self.descriptor.name, self.index)
        } else {
            f.write_str(self.descriptor.name)
        }
    }
}

/// A field, resolved to the register it is located in
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FieldRef {
    /// Register holding the field
    pub register: RegisterRef,
    /// The field
    pub field: &'static FieldDescriptor,
}

/// All MODEM registers of one chip revision
#[derive(Debug)]
pub struct RegisterMap {
    /// Revision described by this map
    pub revision: Revision,
    /// Address of the peripheral
    pub base_address: u32,
    /// Registers, ordered by offset
    pub registers: &'static [RegisterDescriptor],
}

impl RegisterMap {
    /// Looks up a register by name
    ///
    /// Elements of register arrays can be named individually, e.g.
    /// `RAM3_RAMDATA`.
    pub fn register(&self, name: &str) -> Option<RegisterRef> {
        if let Some(descriptor) = self.registers.iter().find(|r| r.name == name) {
            return Some(RegisterRef {
                descriptor,
                index: 0,
            });
        }

        self.registers.iter().find_map(|descriptor| {
            descriptor
                .element_index(name)
                .map(|index| RegisterRef { descriptor, index })
        })
    }

    /// Looks up the register at an offset from the base address
    pub fn register_at(&self, offset: u16) -> Option<RegisterRef> {
        self.registers.iter().find_map(|descriptor| {
            descriptor
                .index_of_offset(offset)
                .map(|index| RegisterRef { descriptor, index })
        })
    }

    /// Looks up a field by register and field name
    pub fn field(&self, register: &str, field: &str) -> Result<FieldRef, Error> {
        let register = self.register(register).ok_or(Error::UnknownRegister)?;
        let field = register
            .descriptor
            .field(field)
            .ok_or(Error::UnknownField)?;

        Ok(FieldRef { register, field })
    }

    /// Looks up a field by its dotted path
    ///
    /// Accepts `CTRL0.DSSSLEN` as well as `MODEM.CTRL0.DSSSLEN`.
    pub fn lookup(&self, path: &str) -> Result<FieldRef, Error> {
        let path = path
            .strip_prefix(BLOCK_NAME)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(path);
        let (register, field) = path.split_once('.').ok_or(Error::UnknownField)?;

        self.field(register, field)
    }

    /// Whether this revision implements a field
    pub fn has_field(&self, register: &str, field: &str) -> bool {
        self.field(register, field).is_ok()
    }

    /// Absolute address of a register
    pub fn address_of(&self, register: RegisterRef) -> u32 {
        self.base_address + register.offset() as u32
    }

    /// All field descriptors of this revision
    pub fn fields(&self) -> impl Iterator<Item = &'static FieldDescriptor> {
        self.registers.iter().flat_map(|register| register.fields.iter())
    }
}

/// Entry point to the typed register API
///
/// Holds one value per register of a revision, starting from the reset
/// values, and tracks which bits have been written. The calculator fills an
/// image by field name; the typed accessors provide the same for code that
/// knows the revision at compile time:
///
/// ```
/// use efr32_modem::ll::{efr32xg1::CTRL0, RegisterImage, Revision};
///
/// let mut image = RegisterImage::new(Revision::Efr32xg1);
/// image.reg::<CTRL0>().modify(|_, w| w.dssslen(31).modformat(2)).unwrap();
/// assert_eq!(image.reg::<CTRL0>().read().unwrap().dssslen(), 31);
/// ```
#[derive(Clone)]
pub struct RegisterImage {
    map: &'static RegisterMap,
    words: [u32; IMAGE_WORDS],
    written: [u32; IMAGE_WORDS],
}

impl RegisterImage {
    /// Creates an image holding the reset values of a revision
    pub fn new(revision: Revision) -> Self {
        let mut image = RegisterImage {
            map: revision.register_map(),
            words: [0; IMAGE_WORDS],
            written: [0; IMAGE_WORDS],
        };
        image.reset();
        image
    }

    /// Restores all reset values and forgets all writes
    pub fn reset(&mut self) {
        self.words = [0; IMAGE_WORDS];
        self.written = [0; IMAGE_WORDS];
        for descriptor in self.map.registers {
            for index in 0..descriptor.count {
                let register = RegisterRef { descriptor, index };
                self.words[register.word()] = descriptor.reset;
            }
        }
    }

    /// The revision this image belongs to
    pub fn revision(&self) -> Revision {
        self.map.revision
    }

    /// The register map this image belongs to
    pub fn map(&self) -> &'static RegisterMap {
        self.map
    }

    /// Typed access to a register
    pub fn reg<R>(&mut self) -> RegAccessor<'_, R> {
        RegAccessor(self, 0, PhantomData)
    }

    /// Typed access to an element of a register array
    pub fn reg_element<R>(&mut self, index: u16) -> RegAccessor<'_, R> {
        RegAccessor(self, index, PhantomData)
    }

    /// Current value of a register
    pub fn read_register(&self, register: &str) -> Result<u32, Error> {
        let register = self
            .map
            .register(register)
            .ok_or(Error::UnknownRegister)?;
        Ok(self.words[register.word()])
    }

    /// Writes a whole register
    ///
    /// Unimplemented bits are cleared.
    pub fn write_register(&mut self, register: &str, value: u32) -> Result<(), Error> {
        let register = self
            .map
            .register(register)
            .ok_or(Error::UnknownRegister)?;
        if !register.descriptor.access.is_writable() {
            return Err(Error::ReadOnly);
        }
        self.store(register, register.descriptor.mask, value);
        Ok(())
    }

    /// Writes the register at an absolute address
    pub fn write_address(&mut self, address: u32, value: u32) -> Result<(), Error> {
        let register = address
            .checked_sub(self.map.base_address)
            .and_then(|offset| u16::try_from(offset).ok())
            .and_then(|offset| self.map.register_at(offset))
            .ok_or(Error::UnknownRegister)?;
        if !register.descriptor.access.is_writable() {
            return Err(Error::ReadOnly);
        }
        self.store(register, register.descriptor.mask, value);
        Ok(())
    }

    /// Current value of a field
    pub fn read_field(&self, register: &str, field: &str) -> Result<u32, Error> {
        let field = self.map.field(register, field)?;
        Ok(field.field.extract(self.words[field.register.word()]))
    }

    /// Writes a field, leaving the rest of the register untouched
    ///
    /// Values that don't fit are truncated with a warning.
    pub fn write_field(&mut self, register: &str, field: &str, value: u32) -> Result<(), Error> {
        let field = self.map.field(register, field)?;
        self.write_field_ref(field, value)
    }

    /// Writes a field that has already been looked up
    pub fn write_field_ref(&mut self, field: FieldRef, value: u32) -> Result<(), Error> {
        let FieldRef { register, field } = field;
        if !field.access.is_writable() {
            return Err(Error::ReadOnly);
        }
        if value > field.max_value() {
            warn!(
                "{}.{}: {} does not fit into {} bits, truncating",
                field.register,
                field.name,
                value,
                field.bit_width
            );
        }

        let word = field.insert(self.words[register.word()], value);
        self.store(register, field.mask(), word);
        Ok(())
    }

    /// Whether any bit of a register has been written
    pub fn is_written(&self, register: &str) -> bool {
        self.map
            .register(register)
            .map(|register| self.written[register.word()] != 0)
            .unwrap_or(false)
    }

    /// All written registers as `(address, value)`, ordered by address
    pub fn writes(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.map
            .registers
            .iter()
            .flat_map(|descriptor| {
                (0..descriptor.count).map(move |index| RegisterRef { descriptor, index })
            })
            .filter(move |register| self.written[register.word()] != 0)
            .map(move |register| (self.map.address_of(register), self.words[register.word()]))
    }

    /// Number of written registers
    pub fn write_count(&self) -> usize {
        self.writes().count()
    }

    fn check_revision(&self, revision: Revision) -> Result<(), Error> {
        if revision != self.map.revision {
            return Err(Error::RevisionMismatch {
                expected: self.map.revision,
                found: revision,
            });
        }
        Ok(())
    }

    /// Stores `word` and marks the bits in `bits` as written
    ///
    /// Overwriting a previously written bit with a different value is legal,
    /// but usually means two calculations disagree, so it is logged.
    fn store(&mut self, register: RegisterRef, bits: u32, word: u32) {
        let index = register.word();
        let word = word & register.descriptor.mask;
        let previous = self.words[index];
        let overlap = self.written[index] & bits;

        if (previous ^ word) & overlap != 0 {
            warn!(
                "{}: overwriting 0x{:08x} with 0x{:08x}",
                register.descriptor.name,
                previous,
                word
            );
        }

        trace!("{} <- 0x{:08x}", register.descriptor.name, word);
        self.words[index] = word;
        self.written[index] |= bits & register.descriptor.mask;
    }
}

impl fmt::Debug for RegisterImage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut map = f.debug_map();
        for (address, value) in self.writes() {
            map.entry(&format_args!("0x{:08x}", address), &format_args!("0x{:08x}", value));
        }
        map.finish()
    }
}

/// Provides typed access to one register of a [`RegisterImage`]
///
/// You can get an instance using [`RegisterImage::reg`].
pub struct RegAccessor<'s, R>(&'s mut RegisterImage, u16, PhantomData<R>);

impl<'s, R> RegAccessor<'s, R>
where
    R: Register,
{
    fn register(&self) -> Result<RegisterRef, Error> {
        self.0.check_revision(R::REVISION)?;
        let descriptor = self
            .0
            .map
            .registers
            .iter()
            .find(|descriptor| descriptor.name == R::NAME)
            .ok_or(Error::UnknownRegister)?;
        if self.1 >= descriptor.count {
            return Err(Error::IndexOutOfRange);
        }

        Ok(RegisterRef {
            descriptor,
            index: self.1,
        })
    }

    /// Read from the register
    #[inline]
    pub fn read(&mut self) -> Result<R::Read, Error>
    where
        R: Readable,
    {
        let register = self.register()?;
        let mut r = R::read();
        *R::buffer(&mut r) = self.0.words[register.word()];

        Ok(r)
    }

    /// Write to the register, starting from its reset value
    #[inline]
    pub fn write<F>(&mut self, f: F) -> Result<(), Error>
    where
        R: Writable,
        F: FnOnce(&mut R::Write) -> &mut R::Write,
    {
        let register = self.register()?;
        let mut w = R::write();
        f(&mut w);

        let word = *R::buffer(&mut w);
        self.0.store(register, R::MASK, word);

        Ok(())
    }

    /// Modify the register
    #[inline]
    pub fn modify<F>(&mut self, f: F) -> Result<(), Error>
    where
        R: Readable + Writable,
        F: for<'r> FnOnce(&mut R::Read, &'r mut R::Write) -> &'r mut R::Write,
    {
        let register = self.register()?;
        let mut r = self.read()?;
        let mut w = R::write();

        *<R as Writable>::buffer(&mut w) = *<R as Readable>::buffer(&mut r);

        f(&mut r, &mut w);

        let word = *<R as Writable>::buffer(&mut w);
        self.0.store(register, R::MASK, word);

        Ok(())
    }
}

/// Implemented for all registers
///
/// This is a mostly internal trait that should not be implemented or used
/// directly by users of this crate. It is exposed through the public API
/// though, so it can't be made private.
pub trait Register {
    /// The register name
    const NAME: &'static str;

    /// The revision whose table defines this register
    const REVISION: Revision;

    /// Offset from the peripheral's base address
    const OFFSET: u16;

    /// Number of array elements
    const COUNT: u16;

    /// Distance between array elements
    const STRIDE: u16;

    /// Access mode
    const ACCESS: Access;

    /// Value after reset
    const RESET: u32;

    /// Implemented bits
    const MASK: u32;

    /// Fields, ordered by bit offset
    const FIELDS: &'static [FieldDescriptor];
}

/// Marker trait for registers that can be read from
///
/// This is a mostly internal trait that should not be implemented or used
/// directly by users of this crate. It is exposed through the public API
/// though, so it can't be made private.
pub trait Readable {
    /// The type that is used to read from the register
    type Read;

    /// Return the read type for this register
    fn read() -> Self::Read;

    /// Return the read type's internal buffer
    fn buffer(r: &mut Self::Read) -> &mut u32;
}

/// Marker trait for registers that can be written to
///
/// This is a mostly internal trait that should not be implemented or used
/// directly by users of this crate. It is exposed through the public API
/// though, so it can't be made private.
pub trait Writable {
    /// The type that is used to write to the register
    type Write;

    /// Return the write type for this register
    fn write() -> Self::Write;

    /// Return the write type's internal buffer
    fn buffer(w: &mut Self::Write) -> &mut u32;
}

/// Maps the access tokens used in the register tables to [`Access`]
macro_rules! access {
    (RO) => {
        $crate::ll::Access::ReadOnly
    };
    (RW) => {
        $crate::ll::Access::ReadWrite
    };
    (WO) => {
        $crate::ll::Access::WriteOnly
    };
}

/// Expands to the first argument if present, otherwise to the default
macro_rules! first_or {
    (; $default:expr) => {
        $default
    };
    ($value:expr; $default:expr) => {
        $value
    };
}

/// Generates register implementations
///
/// Each entry reads
/// `offset, access, reset, mask, NAME(name)[count; stride] { fields }`,
/// where the array part is optional and every field reads
/// `NAME(name), first_bit, last_bit, type;`.
macro_rules! impl_register {
    (
        $(
            $offset:expr,
            $rw:tt,
            $reset:expr,
            $mask:expr,
            $name:ident($name_lower:ident) $([$count:expr; $stride:expr])? {
            #[$doc:meta]
            $(
                $field:ident($field_lower:ident),
                $first_bit:expr,
                $last_bit:expr,
                $ty:ty;
                $(#[$field_doc:meta])*
            )*
            }
        )*
    ) => {
        $(
            #[$doc]
            #[allow(non_camel_case_types)]
            pub struct $name;

            impl $crate::ll::Register for $name {
                const NAME: &'static str = stringify!($name);
                const REVISION: $crate::ll::Revision = REVISION;
                const OFFSET: u16 = $offset;
                const COUNT: u16 = first_or!($($count)?; 1);
                const STRIDE: u16 = first_or!($($stride)?; 4);
                const ACCESS: $crate::ll::Access = access!($rw);
                const RESET: u32 = $reset;
                const MASK: u32 = $mask;
                const FIELDS: &'static [$crate::ll::FieldDescriptor] = &[
                    $(
                        $crate::ll::FieldDescriptor {
                            register: stringify!($name),
                            name: stringify!($field),
                            access: access!($rw),
                            bit_offset: $first_bit,
                            bit_width: $last_bit - $first_bit + 1,
                        },
                    )*
                ];
            }

            impl_rw!($rw, $name, $name_lower);

            #[$doc]
            pub mod $name_lower {
                use core::fmt;

                /// Used to read from the register
                #[derive(Copy, Clone, Eq, PartialEq)]
                pub struct R(pub(crate) u32);

                impl R {
                    /// The whole register
                    #[inline(always)]
                    pub fn bits(&self) -> u32 {
                        self.0
                    }

                    $(
                        $(#[$field_doc])*
                        #[inline(always)]
                        pub fn $field_lower(&self) -> $ty {
                            const WIDTH: u32 = $last_bit - $first_bit + 1;
                            ((self.0 >> $first_bit) & (u32::MAX >> (32 - WIDTH))) as $ty
                        }
                    )*
                }

                impl fmt::Debug for R {
                    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        write!(f, "0x{:08x}", self.0)
                    }
                }

                #[cfg(feature = "defmt")]
                impl defmt::Format for R {
                    fn format(&self, f: defmt::Formatter) {
                        defmt::write!(f, "0x{:08x}", self.0);
                    }
                }

                /// Used to write to the register
                pub struct W(pub(crate) u32);

                impl W {
                    /// Overwrite the whole register
                    #[inline(always)]
                    pub fn bits(&mut self, value: u32) -> &mut Self {
                        self.0 = value;
                        self
                    }

                    $(
                        $(#[$field_doc])*
                        #[inline(always)]
                        pub fn $field_lower(&mut self, value: $ty) -> &mut Self {
                            const WIDTH: u32 = $last_bit - $first_bit + 1;
                            const MASK: u32 = (u32::MAX >> (32 - WIDTH)) << $first_bit;
                            self.0 = (self.0 & !MASK) | (((value as u32) << $first_bit) & MASK);
                            self
                        }
                    )*
                }
            }
        )*

        /// All registers of this revision, ordered by offset
        pub static REGISTERS: &[$crate::ll::RegisterDescriptor] = &[
            $(
                $crate::ll::RegisterDescriptor {
                    name: stringify!($name),
                    offset: $offset,
                    access: access!($rw),
                    reset: $reset,
                    mask: $mask,
                    count: first_or!($($count)?; 1),
                    stride: first_or!($($stride)?; 4),
                    fields: <$name as $crate::ll::Register>::FIELDS,
                },
            )*
        ];

        /// Register map of this revision
        pub static REGISTER_MAP: $crate::ll::RegisterMap = $crate::ll::RegisterMap {
            revision: REVISION,
            base_address: BASE_ADDRESS,
            registers: REGISTERS,
        };
    }
}

/// Internal macro used to implement `Readable`/`Writable`
macro_rules! impl_rw {
    (RO, $name:ident, $name_lower:ident) => {
        impl_rw!(@R, $name, $name_lower);
    };
    (WO, $name:ident, $name_lower:ident) => {
        impl_rw!(@W, $name, $name_lower);
    };
    (RW, $name:ident, $name_lower:ident) => {
        impl_rw!(@R, $name, $name_lower);
        impl_rw!(@W, $name, $name_lower);
    };

    (@R, $name:ident, $name_lower:ident) => {
        impl $crate::ll::Readable for $name {
            type Read = $name_lower::R;

            fn read() -> Self::Read {
                $name_lower::R(0)
            }

            fn buffer(r: &mut Self::Read) -> &mut u32 {
                &mut r.0
            }
        }
    };
    (@W, $name:ident, $name_lower:ident) => {
        impl $crate::ll::Writable for $name {
            type Write = $name_lower::W;

            fn write() -> Self::Write {
                $name_lower::W(<$name as $crate::ll::Register>::RESET)
            }

            fn buffer(w: &mut Self::Write) -> &mut u32 {
                &mut w.0
            }
        }
    };
}

pub(crate) use {access, first_or, impl_register, impl_rw};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_masks() {
        let field = FieldDescriptor {
            register: "CTRL0",
            name: "DSSSLEN",
            access: Access::ReadWrite,
            bit_offset: 11,
            bit_width: 5,
        };

        assert_eq!(field.max_value(), 0x1f);
        assert_eq!(field.mask(), 0x1f << 11);
        assert_eq!(field.last_bit(), 15);
        assert_eq!(field.insert(0xffff_ffff, 0), 0xffff_07ff);
        assert_eq!(field.extract(field.insert(0, 0x3f)), 0x1f);
    }

    #[test]
    fn full_width_field() {
        let field = FieldDescriptor {
            register: "SYNC0",
            name: "SYNC0",
            access: Access::ReadWrite,
            bit_offset: 0,
            bit_width: 32,
        };

        assert_eq!(field.mask(), u32::MAX);
        assert_eq!(field.insert(0, 0xdead_beef), 0xdead_beef);
    }

    #[test]
    fn tables_are_consistent() {
        for revision in Revision::ALL {
            let map = revision.register_map();
            assert_eq!(map.revision, revision);

            let mut last_offset = None;
            for register in map.registers {
                assert_eq!(register.offset % 4, 0, "{}", register.name);
                if let Some(last) = last_offset {
                    assert!(register.offset > last, "{} out of order", register.name);
                }
                last_offset = Some(register.offset + (register.count - 1) * register.stride);
                assert!((last_offset.unwrap() as usize / 4) < IMAGE_WORDS);
                assert_eq!(register.reset & !register.mask, 0, "{}", register.name);

                let mut used = 0u32;
                let mut last_bit = None;
                for field in register.fields {
                    assert_eq!(field.register, register.name);
                    assert!(field.bit_width >= 1);
                    assert!(field.bit_offset as u32 + field.bit_width as u32 <= 32);
                    assert_eq!(used & field.mask(), 0, "{}.{} overlaps", field.register, field.name);
                    assert_eq!(field.mask() & !register.mask, 0, "{}.{}", field.register, field.name);
                    assert_eq!(field.access, register.access);
                    if let Some(last) = last_bit {
                        assert!(field.bit_offset > last);
                    }
                    last_bit = Some(field.last_bit());
                    used |= field.mask();
                }
            }
        }
    }

    #[test]
    fn efr32xg1_fields_cover_mask() {
        for register in efr32xg1::REGISTERS {
            let used = register.fields.iter().fold(0, |used, f| used | f.mask());
            assert_eq!(used, register.mask, "{}", register.name);
        }
    }

    #[test]
    fn lookup_by_path() {
        let map = Revision::Efr32xg1.register_map();
        let field = map.lookup("MODEM.CTRL0.DSSSLEN").unwrap();
        assert_eq!(field.register.offset(), 0x18);
        assert_eq!(field.field.bit_offset, 11);
        assert_eq!(field.field.bit_width, 5);

        assert_eq!(map.lookup("CTRL1.SYNCBITS").unwrap().field.bit_width, 5);
        assert_eq!(map.lookup("CTRL1.NOPE"), Err(Error::UnknownField));
        assert_eq!(map.lookup("NOPE.NOPE"), Err(Error::UnknownRegister));
        assert_eq!(map.lookup("CTRL1"), Err(Error::UnknownField));
    }

    #[test]
    fn array_elements() {
        let map = Revision::Efr32xg1.register_map();
        let ram = map.register("RAM17_RAMDATA").unwrap();
        assert_eq!(ram.index, 17);
        assert_eq!(ram.offset(), 0x400 + 17 * 4);
        assert_eq!(map.address_of(ram), 0x4008_6000 + 0x444);
        assert_eq!(map.register_at(0x444), Some(ram));

        assert!(map.register("RAM256_RAMDATA").is_none());
        assert!(map.register("RAM_1_RAMDATA").is_none());
        assert!(map.register("RAMX_RAMDATA").is_none());
    }

    #[test]
    fn revisions_differ() {
        let xg1 = Revision::Efr32xg1.register_map();
        let xg22 = Revision::Efr32xg22.register_map();

        assert_eq!(xg1.register("CTRL0").unwrap().offset(), 0x18);
        assert_eq!(xg22.register("CTRL0").unwrap().offset(), 0x20);
        assert_ne!(xg1.base_address, xg22.base_address);
        assert!(!xg1.has_field("CTRL0", "OOKASYNCPIN"));
        assert!(Revision::Efr32xg14.register_map().has_field("CTRL0", "OOKASYNCPIN"));
        assert_eq!(Revision::from_family("EFR32XG22"), Some(Revision::Efr32xg22));
        assert_eq!(Revision::from_family("efr32xg99"), None);
    }

    #[test]
    fn typed_access() {
        use efr32xg1::{CTRL0, CTRL2, IF};

        let mut image = RegisterImage::new(Revision::Efr32xg1);
        assert_eq!(image.reg::<CTRL2>().read().unwrap().bits(), 0x1000);
        assert!(!image.is_written("CTRL2"));

        image.reg::<CTRL0>().write(|w| w.dssslen(31).coding(2)).unwrap();
        let ctrl0 = image.reg::<CTRL0>().read().unwrap();
        assert_eq!(ctrl0.dssslen(), 31);
        assert_eq!(ctrl0.coding(), 2);
        assert_eq!(image.read_field("CTRL0", "DSSSLEN").unwrap(), 31);

        // Truncated to the field width
        image.reg::<CTRL0>().modify(|_, w| w.modformat(0xff)).unwrap();
        assert_eq!(image.reg::<CTRL0>().read().unwrap().modformat(), 0b111);

        assert_eq!(image.reg::<IF>().read().unwrap().bits(), 0);
    }

    #[test]
    fn typed_access_checks_revision() {
        let mut image = RegisterImage::new(Revision::Efr32xg22);
        assert_eq!(
            image.reg::<efr32xg1::CTRL0>().read().unwrap_err(),
            Error::RevisionMismatch {
                expected: Revision::Efr32xg22,
                found: Revision::Efr32xg1,
            }
        );
        assert!(image.reg::<efr32xg22::CTRL0>().read().is_ok());
    }

    #[test]
    fn array_element_access() {
        use efr32xg1::RAM_RAMDATA;

        let mut image = RegisterImage::new(Revision::Efr32xg1);
        image.reg_element::<RAM_RAMDATA>(3).write(|w| w.data(0x5a)).unwrap();
        assert_eq!(image.read_register("RAM3_RAMDATA").unwrap(), 0x5a);
        assert_eq!(
            image.reg_element::<RAM_RAMDATA>(256).read().unwrap_err(),
            Error::IndexOutOfRange
        );
    }

    #[test]
    fn writes_are_ordered_and_masked() {
        let mut image = RegisterImage::new(Revision::Efr32xg1);
        image.write_field("TIMING", "TIMTHRESH", 0x40).unwrap();
        image.write_field("CTRL0", "CODING", 1).unwrap();
        image.write_register("PRE", 0xffff_ffff).unwrap();

        let writes: Vec<_> = image.writes().collect();
        assert_eq!(
            writes,
            vec![
                (0x4008_6018, 1 << 4),
                (0x4008_603c, 0xffff_1fff),
                (0x4008_6048, 0x40),
            ]
        );
        assert_eq!(image.write_count(), 3);
    }

    #[test]
    fn read_only_fields_are_rejected() {
        let mut image = RegisterImage::new(Revision::Efr32xg1);
        assert_eq!(
            image.write_field("STATUS", "DEMODSTATE", 1),
            Err(Error::ReadOnly)
        );
        assert_eq!(image.write_register("STATUS", 1), Err(Error::ReadOnly));
        assert_eq!(image.write_count(), 0);
    }
}
