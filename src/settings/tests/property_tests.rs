use std::cell::RefCell;
use std::rc::Rc;

use crate::settings::ValueProperty;

#[test]
fn test_clones_share_value() {
    let property = ValueProperty::new(false);
    let handle = property.clone();

    handle.set(true);

    assert!(property.get());
    assert!(property.shares_storage(&handle));
}

#[test]
fn test_listeners_see_every_set() {
    let property = ValueProperty::new(String::new());
    let seen = Rc::new(RefCell::new(Vec::new()));

    {
        let seen = seen.clone();
        property.connect_changed(move |value: &String| seen.borrow_mut().push(value.clone()));
    }

    property.set("a".to_string());
    property.set("b".to_string());

    assert_eq!(*seen.borrow(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_listener_may_read_property() {
    let property = ValueProperty::new(1);
    let observed = Rc::new(RefCell::new(0));

    {
        let observed = observed.clone();
        let reader = property.clone();
        property.connect_changed(move |_| *observed.borrow_mut() = reader.get());
    }

    property.set(7);
    assert_eq!(*observed.borrow(), 7);
}

#[test]
fn test_detached_copy_is_independent() {
    let property = ValueProperty::new(3);
    let copy = property.detached();

    copy.set(4);

    assert_eq!(property.get(), 3);
    assert!(!property.shares_storage(&copy));
}
