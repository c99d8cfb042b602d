//! Behaviour of the code `#[derive(Properties)]` generates.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::any::{Any, TypeId};

use crate::access::{AccessError, TypedGet, TypedSet};
use crate::derive::Properties;
use crate::info::{DynamicProperties, Properties as _, PropertyAccess};
use crate::registry::PropertyRegistry;

#[derive(Properties, Debug, Default, PartialEq)]
struct Account {
    id: u64,
    #[property(read_only)]
    created: u64,
    #[property(write_only)]
    password_hash: u64,
    #[property(rename = "displayName")]
    display_name: String,
    #[property(skip)]
    cache: Vec<u8>,
    nickname: Option<String>,
}

#[derive(Properties, Default)]
struct Pair(i32, #[property(rename = "second")] i32);

#[derive(Properties)]
struct Marker;

#[derive(Properties, Default)]
#[property(computed(name = "area", ty = f32, get = Self::area))]
#[property(computed(name = "scale", ty = f32, get = Self::scale, set = Self::set_scale))]
#[property(computed(name = "reset", ty = (), set = |r: &mut Self, _: ()| *r = Self::default()))]
struct Rect {
    w: f32,
    h: f32,
}

impl Rect {
    fn area(&self) -> f32 {
        self.w * self.h
    }

    fn scale(&self) -> f32 {
        self.w
    }

    fn set_scale(&mut self, scale: f32) {
        self.h *= scale / self.w;
        self.w = scale;
    }
}

#[derive(Properties)]
struct Wrapper<T> {
    value: T,
    count: usize,
}

#[derive(Properties)]
struct Matrix<const N: usize> {
    rows: [u8; N],
}

#[test]
fn named_fields() {
    let table = Account::type_properties();
    assert!(table.ty().is::<Account>());

    let names: Vec<_> = table.names().collect();
    assert_eq!(
        names,
        ["id", "created", "password_hash", "displayName", "nickname"]
    );
    assert!(table.property("cache").is_none());

    let access: Vec<_> = table.iter().map(|info| info.access()).collect();
    assert_eq!(
        access,
        [
            PropertyAccess::READ_WRITE,
            PropertyAccess::READ,
            PropertyAccess::WRITE,
            PropertyAccess::READ_WRITE,
            PropertyAccess::READ_WRITE,
        ]
    );
}

#[test]
fn capabilities_follow_field_attributes() {
    let table = Account::type_properties();
    let mut account = Account {
        created: 1700,
        ..Default::default()
    };

    let created = table.property("created").unwrap();
    assert!(created.full_accessor().unwrap().is_none());
    assert!(created.setter().unwrap().is_none());
    let getter = created.getter().unwrap().unwrap();
    assert_eq!(getter.get_value_as::<u64>(&account), Ok(1700));

    let password = table.property("password_hash").unwrap();
    assert!(password.full_accessor().unwrap().is_none());
    assert!(password.getter().unwrap().is_none());
    let setter = password.setter().unwrap().unwrap();
    setter.set_value_from(&mut account, 42_u64).unwrap();
    assert_eq!(account.password_hash, 42);

    let display = table.property("displayName").unwrap();
    let accessor = display.typed_accessor::<Account, String>().unwrap().unwrap();
    accessor.set(&mut account, String::from("Ferris"));
    assert_eq!(accessor.get(&account), "Ferris");
    assert_eq!(account.display_name, "Ferris");
}

#[test]
fn nullable_field() {
    let mut account = Account::default();
    let nickname = Account::type_properties().property("nickname").unwrap();
    let accessor = nickname.full_accessor().unwrap().unwrap();

    assert_eq!(accessor.get_value_as::<Option<String>>(&account), Ok(None));
    accessor
        .set_value_from(&mut account, Some(String::from("crab")))
        .unwrap();
    assert_eq!(account.nickname.as_deref(), Some("crab"));
    accessor.set_value_from(&mut account, None::<String>).unwrap();
    assert_eq!(account.nickname, None);
}

#[test]
fn mismatches_leave_instance_untouched() {
    let mut account = Account::default();
    let id = Account::type_properties().property("id").unwrap();
    let accessor = id.full_accessor().unwrap().unwrap();

    let mut pair = Pair::default();
    assert!(matches!(
        accessor.set_value_from(&mut pair, 7_u64),
        Err(AccessError::MismatchedInstance { .. })
    ));
    assert!(matches!(
        accessor.set_value_from(&mut account, 7_u32),
        Err(AccessError::MismatchedRequest { .. })
    ));
    assert!(matches!(
        accessor.set_value(&mut account, Box::new(7_u32)),
        Err(AccessError::MismatchedValue { .. })
    ));
    assert!(matches!(
        accessor.get_value_as::<u32>(&account),
        Err(AccessError::MismatchedRequest { .. })
    ));
    assert_eq!(account, Account::default());
}

#[test]
fn tuple_and_unit_structs() {
    let table = Pair::type_properties();
    let names: Vec<_> = table.names().collect();
    assert_eq!(names, ["0", "second"]);

    let mut pair = Pair(1, 2);
    let second = table.property("second").unwrap();
    second.setter().unwrap().unwrap().set_value_from(&mut pair, 5_i32).unwrap();
    assert_eq!(pair.1, 5);

    assert!(Marker::type_properties().is_empty());
}

#[test]
fn computed_properties() {
    let table = Rect::type_properties();
    let names: Vec<_> = table.names().collect();
    assert_eq!(names, ["w", "h", "area", "scale", "reset"]);

    let mut rect = Rect { w: 2.0, h: 3.0 };

    let area = table.property("area").unwrap();
    assert_eq!(area.access(), PropertyAccess::READ);
    assert!(area.setter().unwrap().is_none());
    assert_eq!(area.getter().unwrap().unwrap().get_value_as::<f32>(&rect), Ok(6.0));

    let scale = table.property("scale").unwrap().typed_accessor::<Rect, f32>();
    let scale = scale.unwrap().unwrap();
    scale.set(&mut rect, 4.0);
    assert_eq!((rect.w, rect.h), (4.0, 6.0));

    let reset = table.property("reset").unwrap();
    assert_eq!(reset.access(), PropertyAccess::WRITE);
    reset.setter().unwrap().unwrap().set_value_from(&mut rect, ()).unwrap();
    assert_eq!((rect.w, rect.h), (0.0, 0.0));
}

#[test]
fn generic_tables_per_instance() {
    let a = Wrapper::<u8>::type_properties();
    let b = Wrapper::<String>::type_properties();

    assert!(a.ty().is::<Wrapper<u8>>());
    assert!(b.ty().is::<Wrapper<String>>());
    assert!(a.property("value").unwrap().value().is::<u8>());
    assert!(b.property("value").unwrap().value().is::<String>());
    assert!(core::ptr::eq(a, Wrapper::<u8>::type_properties()));

    let wrapper = Wrapper {
        value: String::from("inner"),
        count: 1,
    };
    let getter = b.property("value").unwrap().typed_getter::<Wrapper<String>, String>();
    assert_eq!(getter.unwrap().unwrap().get(&wrapper), "inner");
    assert!(a.property("value").unwrap().typed_getter::<Wrapper<String>, String>().is_err());

    let m2 = Matrix::<2>::type_properties();
    let m3 = Matrix::<3>::type_properties();
    assert!(m2.property("rows").unwrap().value().is::<[u8; 2]>());
    assert!(m3.property("rows").unwrap().value().is::<[u8; 3]>());
}

#[test]
fn dynamic_dispatch() {
    let account = Account {
        id: 9,
        ..Default::default()
    };
    let pair = Pair(3, 4);
    let objects: [&dyn DynamicProperties; 2] = [&account, &pair];

    let mut firsts = Vec::new();
    for object in objects {
        let info = object.reflect_properties().property_at(0).unwrap();
        let getter = info.getter().unwrap().unwrap();
        firsts.push(getter.get_value(object as &dyn Any).unwrap());
    }

    assert_eq!(firsts[0].downcast_ref::<u64>(), Some(&9));
    assert_eq!(firsts[1].downcast_ref::<i32>(), Some(&3));
}

#[test]
fn registry_lookup() {
    let mut registry = PropertyRegistry::new();
    assert!(registry.register::<Account>());
    assert!(registry.register::<Wrapper<u8>>());

    let info = registry.property(TypeId::of::<Account>(), "displayName").unwrap();
    assert!(info.value().is::<String>());
    assert!(registry.get_with_type_name("Account").is_some());
    assert!(registry.get_with_type_name("Wrapper<u8>").is_some());
}

#[cfg(feature = "auto_register")]
#[test]
fn auto_register() {
    #[derive(Properties)]
    #[property(auto_register)]
    struct Light {
        intensity: f32,
    }

    let mut registry = PropertyRegistry::new();
    assert!(registry.auto_register());
    assert!(registry.contains(TypeId::of::<Light>()));
    assert!(!registry.contains(TypeId::of::<Account>()));

    let before = registry.len();
    assert!(registry.auto_register());
    assert_eq!(registry.len(), before);

    let light = Light { intensity: 0.5 };
    let info = registry.properties_of(&light).unwrap().property("intensity").unwrap();
    assert_eq!(info.getter().unwrap().unwrap().get_value_as::<f32>(&light), Ok(0.5));
}

#[cfg(feature = "property_docs")]
#[test]
fn property_docs() {
    #[derive(Properties)]
    #[property(computed(name = "half", ty = u8, get = |d: &Self| d.documented / 2, doc = "Half of it."))]
    struct Documented {
        /// Documented field.
        documented: u8,
        /// Replaced.
        #[property(doc = "Custom.")]
        custom: u8,
        /// Dropped.
        #[property(doc = false)]
        hidden: u8,
        plain: u8,
    }

    let table = Documented::type_properties();
    let docs: Vec<_> = table.iter().map(|info| info.docs()).collect();
    assert_eq!(
        docs,
        [
            Some("Documented field."),
            Some("Custom."),
            None,
            None,
            Some("Half of it."),
        ]
    );
}
