/// Visit every size-`k` combination of `items`, in lexicographic order of
/// positions. `k == 0` or `k > items.len()` visits nothing.
pub fn for_each_combination<T, F>(items: &[T], k: usize, mut callback: F)
where
    F: FnMut(&[&T]),
{
    if k == 0 || k > items.len() {
        return;
    }

    let mut current = Vec::with_capacity(k);
    combinations_recursive(items, k, 0, &mut current, &mut callback);
}

fn combinations_recursive<'a, T, F>(
    items: &'a [T],
    k: usize,
    start: usize,
    current: &mut Vec<&'a T>,
    callback: &mut F,
) where
    F: FnMut(&[&T]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    // Stop early once the remaining items cannot fill the combination.
    let needed = k - current.len();
    for i in start..=items.len() - needed {
        current.push(&items[i]);
        combinations_recursive(items, k, i + 1, current, callback);
        current.pop();
    }
}

/// Collect all size-`k` combinations of `items` as owned vectors.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    let mut result = Vec::new();
    for_each_combination(items, k, |combination| {
        result.push(combination.iter().map(|&item| item.clone()).collect());
    });
    result
}

/// `C(n, k)`, saturating at `usize::MAX`.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * (n - i) as u128 / (i + 1) as u128;
        if acc > usize::MAX as u128 {
            return usize::MAX;
        }
    }
    acc as usize
}
