use std::cmp::Ordering;

/// Advances `v` to the next permutation in lexicographic order.
///
/// Returns `false`, leaving `v` untouched, if `v` is already the last permutation (no element is
/// smaller than its right neighbour). Repeated elements are fine: each distinct arrangement is
/// produced exactly once.
pub fn permute<T: Ord>(v: &mut [T]) -> bool {
    permute_by(v, T::cmp)
}

/// Like [`permute`], but ordering elements with `compare`, which must be a total order.
///
/// Passing a reversed comparator steps to the previous permutation instead.
pub fn permute_by<T>(v: &mut [T], mut compare: impl FnMut(&T, &T) -> Ordering) -> bool {
    // Rightmost ascent. Everything after the pivot is non-increasing.
    let mut pivot = None;
    for i in 1..v.len() {
        if compare(&v[i], &v[i - 1]) == Ordering::Greater {
            pivot = Some(i - 1);
        }
    }
    let Some(pivot) = pivot else {
        return false;
    };

    // The last element strictly greater than the pivot is the smallest such element, and the
    // rightmost among equals.
    let mut successor = pivot + 1;
    for i in successor + 1..v.len() {
        if compare(&v[i], &v[pivot]) == Ordering::Greater {
            successor = i;
        }
    }

    swap(v, pivot, successor);
    reverse_from(v, pivot + 1);
    true
}

/// Calls `visit` on `v` and then on every following permutation, stopping after the last one.
///
/// Returns how many arrangements were visited. Starting from sorted order, that's every distinct
/// arrangement of the elements.
pub fn visit_lexicographic<T: Ord>(v: &mut [T], visit: impl FnMut(&[T])) -> usize {
    visit_lexicographic_by(v, T::cmp, visit)
}

pub fn visit_lexicographic_by<T>(
    v: &mut [T],
    mut compare: impl FnMut(&T, &T) -> Ordering,
    mut visit: impl FnMut(&[T]),
) -> usize {
    let mut visited = 0;
    loop {
        visit(&*v);
        visited += 1;
        if !permute_by(v, &mut compare) {
            return visited;
        }
    }
}

fn swap<T>(v: &mut [T], i: usize, j: usize) -> bool {
    if i >= v.len() || j >= v.len() {
        return false;
    }
    v.swap(i, j);
    true
}

fn reverse_from<T>(v: &mut [T], start: usize) -> bool {
    if start >= v.len() {
        return false;
    }
    let mut lo = start;
    let mut hi = v.len() - 1;
    while lo < hi {
        v.swap(lo, hi);
        lo += 1;
        hi -= 1;
    }
    true
}
