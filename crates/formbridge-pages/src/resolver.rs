//! Property-name resolution
//!
//! Bindings refer to data fields through a typed key instead of a raw field-name
//! string. Each bindable type declares its keys with [`field_keys!`](crate::field_keys),
//! and a selector picks one key out of the [`FieldMap`] for that type:
//!
//! ```
//! use formbridge_forms::FormValue;
//! use formbridge_pages::{field_keys, property_name, Bindable};
//!
//! field_keys! {
//!     pub enum PersonField {
//!         FirstName => "firstName",
//!         LastName => "lastName",
//!     }
//! }
//!
//! struct Person {
//!     first_name: String,
//!     last_name: String,
//! }
//!
//! impl Bindable for Person {
//!     type Field = PersonField;
//!
//!     fn field_value(&self, field: PersonField) -> FormValue {
//!         match field {
//!             PersonField::FirstName => FormValue::from(self.first_name.as_str()),
//!             PersonField::LastName => FormValue::from(self.last_name.as_str()),
//!         }
//!     }
//!
//!     fn set_field_value(&mut self, field: PersonField, value: FormValue) {
//!         let text = value.display_text();
//!         match field {
//!             PersonField::FirstName => self.first_name = text,
//!             PersonField::LastName => self.last_name = text,
//!         }
//!     }
//! }
//!
//! let person = Person { first_name: "Jim".into(), last_name: "Bloggs".into() };
//! assert_eq!(property_name(&person, |_| PersonField::FirstName), "firstName");
//! assert_eq!(person.field_value(PersonField::LastName), FormValue::from("Bloggs"));
//! ```
//!
//! The resolver does not check that the selector's key belongs to the map it was
//! given; it returns whatever the selector picks.

use formbridge_forms::FormValue;
use std::fmt;
use std::marker::PhantomData;

/// Identifier of one bindable field
pub trait FieldKey: Copy + Eq + fmt::Debug + 'static {
	/// Property name of the field
	fn name(self) -> &'static str;

	/// Every key, in declaration order
	fn all() -> &'static [Self];
}

/// Data object whose fields can be bound to form controls
pub trait Bindable {
	type Field: FieldKey;

	fn field_value(&self, field: Self::Field) -> FormValue;

	fn set_field_value(&mut self, field: Self::Field, value: FormValue);
}

/// Mapping from each property name of a bindable type to its key
pub struct FieldMap<K> {
	_marker: PhantomData<K>,
}

impl<K: FieldKey> FieldMap<K> {
	pub fn new() -> Self {
		Self {
			_marker: PhantomData,
		}
	}

	/// Key for a property name
	pub fn get(&self, name: &str) -> Option<K> {
		K::all().iter().copied().find(|key| key.name() == name)
	}

	pub fn keys(&self) -> impl Iterator<Item = K> {
		K::all().iter().copied()
	}

	pub fn names(&self) -> impl Iterator<Item = &'static str> {
		K::all().iter().map(|key| key.name())
	}
}

impl<K: FieldKey> Default for FieldMap<K> {
	fn default() -> Self {
		Self::new()
	}
}

impl<K: FieldKey> fmt::Debug for FieldMap<K> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map()
			.entries(self.keys().map(|key| (key.name(), key)))
			.finish()
	}
}

/// Runs a selector over the field map of `K`
pub fn resolve_field<K, F>(selector: F) -> K
where
	K: FieldKey,
	F: FnOnce(&FieldMap<K>) -> K,
{
	selector(&FieldMap::new())
}

/// Name of the property a selector picks on `data`.
///
/// Returns the property name, never the property's value.
pub fn property_name<T, F>(_data: &T, selector: F) -> &'static str
where
	T: Bindable,
	F: FnOnce(&FieldMap<T::Field>) -> T::Field,
{
	resolve_field(selector).name()
}

/// Declares a field key enum and its [`FieldKey`] implementation.
///
/// ```
/// use formbridge_pages::{field_keys, FieldKey};
///
/// field_keys! {
///     #[doc = "Fields of an address"]
///     pub enum AddressField {
///         Street => "street",
///         PostCode => "postCode",
///     }
/// }
///
/// assert_eq!(AddressField::PostCode.name(), "postCode");
/// assert_eq!(AddressField::all(), &[AddressField::Street, AddressField::PostCode]);
/// ```
#[macro_export]
macro_rules! field_keys {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$($variant:ident => $field:literal),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		$vis enum $name {
			$($variant),+
		}

		impl $crate::FieldKey for $name {
			fn name(self) -> &'static str {
				match self {
					$(Self::$variant => $field),+
				}
			}

			fn all() -> &'static [Self] {
				&[$(Self::$variant),+]
			}
		}
	};
}
