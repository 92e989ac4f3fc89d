//! In-place stable sort driven by a `less` predicate.
//!
//! `slice::sort_by` needs a total order and may panic when handed one that
//! is not. The ranking predicates are not total orders, so they run through
//! this block insertion sort + symmetric merge instead. Its sequence of
//! comparisons is fixed by the slice length, which keeps the output a pure
//! function of the input whatever the predicate does.

const BLOCK_SIZE: usize = 20;

/// Stable sort of `items` where `less(a, b)` means `a` goes before `b`.
pub fn stable_sort_by<T, F>(items: &mut [T], less: F)
where
    F: Fn(&T, &T) -> bool,
{
    let n = items.len();

    let mut a = 0;
    let mut b = BLOCK_SIZE;
    while b <= n {
        insertion_sort(items, a, b, &less);
        a = b;
        b += BLOCK_SIZE;
    }
    insertion_sort(items, a, n, &less);

    let mut block = BLOCK_SIZE;
    while block < n {
        a = 0;
        b = 2 * block;
        while b <= n {
            sym_merge(items, a, a + block, b, &less);
            a = b;
            b += 2 * block;
        }
        let m = a + block;
        if m < n {
            sym_merge(items, a, m, n, &less);
        }
        block *= 2;
    }
}

fn insertion_sort<T, F>(items: &mut [T], a: usize, b: usize, less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    for i in a + 1..b {
        let mut j = i;
        while j > a && less(&items[j], &items[j - 1]) {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}

/// Merge the sorted runs `items[a..m]` and `items[m..b]` in place.
fn sym_merge<T, F>(items: &mut [T], a: usize, m: usize, b: usize, less: &F)
where
    F: Fn(&T, &T) -> bool,
{
    if m - a == 1 {
        // Binary search for the slot of items[a] in the right run.
        let (mut i, mut j) = (m, b);
        while i < j {
            let h = (i + j) / 2;
            if less(&items[h], &items[a]) {
                i = h + 1;
            } else {
                j = h;
            }
        }
        for k in a..i - 1 {
            items.swap(k, k + 1);
        }
        return;
    }

    if b - m == 1 {
        // Binary search for the slot of items[m] in the left run.
        let (mut i, mut j) = (a, m);
        while i < j {
            let h = (i + j) / 2;
            if !less(&items[m], &items[h]) {
                i = h + 1;
            } else {
                j = h;
            }
        }
        let mut k = m;
        while k > i {
            items.swap(k, k - 1);
            k -= 1;
        }
        return;
    }

    let mid = (a + b) / 2;
    let n = mid + m;
    let (mut start, mut r) = if m > mid { (n - b, mid) } else { (a, m) };
    let p = n - 1;

    while start < r {
        let c = (start + r) / 2;
        if !less(&items[p - c], &items[c]) {
            start = c + 1;
        } else {
            r = c;
        }
    }

    let end = n - start;
    if start < m && m < end {
        items[start..end].rotate_left(m - start);
    }
    if a < start && start < mid {
        sym_merge(items, a, start, mid, less);
    }
    if mid < end && end < b {
        sym_merge(items, mid, end, b, less);
    }
}
