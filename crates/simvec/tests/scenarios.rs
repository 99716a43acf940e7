//! End-to-end scenarios through the facade crate.

use simvec::prelude::*;
use simvec_test_utils::fixtures::words;
use simvec_test_utils::Tracked;

#[test]
fn insert_and_erase_in_the_middle() {
    let mut s = sequence![1, 2, 3];
    s.insert(s.begin() + 1, 9).unwrap();
    assert_eq!(s, [1, 9, 2, 3]);
    assert_eq!(s.len(), 4);

    s.erase(s.begin() + 1).unwrap();
    assert_eq!(s, [1, 2, 3]);
    assert_eq!(s.len(), 3);
}

#[test]
fn reserve_then_fill_then_overflow() {
    let mut s: Sequence<i32> = Sequence::new();
    s.reserve(4);
    assert_eq!((s.len(), s.capacity()), (0, 4));

    for i in 0..4 {
        s.push_back(i);
    }
    assert_eq!((s.len(), s.capacity()), (4, 4));

    s.push_back(4);
    assert_eq!(s.capacity(), 8);
    assert_eq!(s, [0, 1, 2, 3, 4]);
}

#[test]
fn checked_access_past_size() {
    let s = sequence![1, 2, 3];
    let err = s.at(5).unwrap_err();
    assert_eq!(err, SequenceError::OutOfRange { index: 5, len: 3 });
    assert_eq!(err.to_string(), "index 5 out of range for sequence of size 3");
}

#[test]
fn resize_down_then_up_restores_defaults() {
    let mut s = Sequence::from(words(5));
    s.resize(2);
    assert_eq!(s, ["w0".to_string(), "w1".to_string()]);
    assert_eq!(s.capacity(), 5);

    s.resize(5);
    assert_eq!(s.capacity(), 5);
    assert_eq!(&s.as_slice()[..2], ["w0", "w1"]);
    assert!(s.iter().skip(2).all(String::is_empty));
}

#[test]
fn errors_compose_with_question_mark() {
    fn second_plus_third(s: &Sequence<i32>) -> Result<i32, SequenceError> {
        Ok(s.at(1)? + s.at(2)?)
    }

    assert_eq!(second_plus_third(&sequence![1, 2, 3]), Ok(5));
    assert!(second_plus_third(&sequence![1]).is_err());
}

#[test]
fn positions_are_renewed_after_reallocating_insert() {
    let mut s = sequence![10, 20];
    // Full: the insert reallocates, and the returned position is the
    // only one to trust afterwards.
    let pos = s.insert(s.end(), 30).unwrap();
    assert_eq!(s.capacity(), 4);
    assert_eq!(s[pos.index()], 30);
}

#[test]
fn reserve_request_and_sized_constructor_differ() {
    let reserved: Sequence<u8> = Sequence::from(reserve(3));
    let sized: Sequence<u8> = Sequence::with_size(3);
    assert_eq!((reserved.len(), reserved.capacity()), (0, 3));
    assert_eq!((sized.len(), sized.capacity()), (3, 3));
    assert_ne!(reserved, sized);
}

#[test]
fn macro_forms() {
    let empty: Sequence<i32> = sequence![];
    assert!(empty.is_empty());
    let filled = sequence!["ab".to_string(); 2];
    assert_eq!(filled, vec!["ab".to_string(), "ab".to_string()]);
    let trailing = sequence![1, 2,];
    assert_eq!(trailing.len(), 2);
}

#[test]
fn copy_does_not_alias_and_move_empties_source() {
    let mut original = sequence![1, 2, 3];
    let mut copy = original.clone();
    copy[0] = 99;
    assert_eq!(original, [1, 2, 3]);

    let moved = std::mem::take(&mut original);
    assert!(original.is_empty());
    assert_eq!(original.capacity(), 0);
    assert_eq!(moved, [1, 2, 3]);
}

#[test]
fn nested_sequences() {
    let mut grid: Sequence<Sequence<u8>> = Sequence::new();
    grid.resize(3);
    grid[1].push_back(7);
    grid.push_back(sequence![1, 2]);
    assert_eq!(grid.len(), 4);
    assert_eq!(grid[1], [7]);
    assert_eq!(grid[3], [1, 2]);
}

#[test]
fn long_lived_sequence_releases_all_elements() {
    let before = Tracked::live();
    {
        let mut s: Sequence<Tracked> = Sequence::with_size(3);
        for i in 0..100 {
            s.push_back(Tracked::new(i));
            if i % 3 == 0 {
                s.erase(s.begin()).unwrap();
            }
            if i % 7 == 0 {
                s.insert(s.begin() + s.len() / 2, Tracked::new(-i)).unwrap();
            }
        }
        s.clear();
        s.resize(10);
        let _copy = s.clone();
    }
    assert_eq!(Tracked::live(), before);
}

#[test]
fn owned_buffer_is_usable_on_its_own() {
    let mut buf: OwnedBuffer<u16> = OwnedBuffer::with_len(2);
    buf[0] = 5;
    let mut other = OwnedBuffer::new();
    buf.swap(&mut other);
    assert!(!buf.is_allocated());
    assert_eq!(buf.first(), Err(BufferError::NullBuffer));
    assert_eq!(other.first(), Ok(&5));
}
