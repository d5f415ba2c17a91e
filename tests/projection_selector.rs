use std::cell::RefCell;
use std::rc::Rc;

use projector::data::projection::{ProjectionComponentSelector, ZDropdown};
use projector::ProjectorError;

/// Records every value passed to the Z dropdown.
#[derive(Clone, Default)]
struct ZDropdownSpy {
    calls: Rc<RefCell<Vec<bool>>>,
}

impl ZDropdown for ZDropdownSpy {
    fn set_z_dropdown_enabled(&mut self, enabled: bool) {
        self.calls.borrow_mut().push(enabled);
    }
}

fn selector_with_spy() -> (ProjectionComponentSelector, ZDropdownSpy) {
    let spy = ZDropdownSpy::default();
    let selector = ProjectionComponentSelector::new(Box::new(spy.clone()));
    (selector, spy)
}

#[test]
fn sets_x_and_y_for_2d_component_values() {
    let (mut selector, spy) = selector_with_spy();

    selector.set_components(&[0, 1]).unwrap();

    let sel = selector.selection();
    assert_eq!(sel.component_x, 0);
    assert_eq!(sel.component_y, 1);
    assert!(!sel.is_3d);
    assert_eq!(*spy.calls.borrow(), vec![false]);
}

#[test]
fn sets_x_y_and_z_for_3d_component_values() {
    let (mut selector, spy) = selector_with_spy();

    selector.set_components(&[0, 1, 2]).unwrap();

    let sel = selector.selection();
    assert_eq!(sel.component_x, 0);
    assert_eq!(sel.component_y, 1);
    assert_eq!(sel.component_z, 2);
    assert!(sel.is_3d);
    assert_eq!(*spy.calls.borrow(), vec![true]);
}

#[test]
fn gets_component_values_from_2d_projection() {
    let (mut selector, _spy) = selector_with_spy();
    selector.set_components(&[0, 1]).unwrap();
    assert_eq!(selector.components(), vec![0, 1]);
}

#[test]
fn gets_component_values_from_3d_projection() {
    let (mut selector, _spy) = selector_with_spy();
    selector.set_components(&[0, 1, 2]).unwrap();
    assert_eq!(selector.components(), vec![0, 1, 2]);
}

#[test]
fn components_read_back_as_written() {
    let (mut selector, spy) = selector_with_spy();
    let inputs: [&[usize]; 5] = [&[3, 7], &[9, 0, 4], &[5, 5], &[2, 1, 2], &[8, 6]];
    for v in inputs {
        selector.set_components(v).unwrap();
        assert_eq!(selector.components(), v.to_vec());
        assert_eq!(spy.calls.borrow().last().copied(), Some(v.len() == 3));
    }
    assert_eq!(spy.calls.borrow().len(), inputs.len());
}

#[test]
fn switching_back_to_2d_disables_z_dropdown() {
    let (mut selector, spy) = selector_with_spy();
    selector.set_components(&[0, 1, 2]).unwrap();
    selector.set_components(&[4, 3]).unwrap();
    assert_eq!(selector.components(), vec![4, 3]);
    assert_eq!(*spy.calls.borrow(), vec![true, false]);
}

#[test]
fn wrong_lengths_are_rejected_without_side_effects() {
    let (mut selector, spy) = selector_with_spy();
    selector.set_components(&[1, 2, 3]).unwrap();

    for bad in [&[][..], &[4][..], &[4, 5, 6, 7][..]] {
        match selector.set_components(bad) {
            Err(ProjectorError::InvalidArgument { len }) => assert_eq!(len, bad.len()),
            other => panic!("expected InvalidArgument, got {other:?}"),
        }
    }

    assert_eq!(selector.components(), vec![1, 2, 3]);
    assert_eq!(*spy.calls.borrow(), vec![true]);
}
