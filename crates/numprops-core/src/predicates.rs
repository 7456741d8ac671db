//! Pure predicates over non-negative integers.
//!
//! Each predicate maps a `u64` to a `bool` with no side effects. Digit-based
//! checks walk the decimal representation with bounded loops rather than
//! recursion, so arbitrarily large inputs never grow the call stack.

/// Parity check.
pub fn even(n: u64) -> bool {
    n % 2 == 0
}

/// Complement of [`even`].
pub fn odd(n: u64) -> bool {
    !even(n)
}

/// A buzz number ends in 7 or is divisible by 7.
pub fn buzz(n: u64) -> bool {
    n % 10 == 7 || n % 7 == 0
}

/// A duck number contains at least one zero digit.
///
/// Zero itself is not a duck number: there is no digit position left to
/// examine once the leading digit is accounted for.
pub fn duck(mut n: u64) -> bool {
    while n > 0 {
        if n % 10 == 0 {
            return true;
        }
        n /= 10;
    }
    false
}

/// A palindromic number reads the same forward and backward in decimal.
pub fn palindromic(n: u64) -> bool {
    let digits = digits(n);
    let mut i = 0;
    let mut j = digits.len() - 1;
    while i < j {
        if digits[i] != digits[j] {
            return false;
        }
        i += 1;
        j -= 1;
    }
    true
}

/// A gapful number has at least three digits and is divisible by the
/// two-digit number formed from its first and last digits.
pub fn gapful(n: u64) -> bool {
    if n < 100 {
        return false;
    }
    let mut first = n;
    while first >= 10 {
        first /= 10;
    }
    n % (first * 10 + n % 10) == 0
}

/// A spy number has equal digit sum and digit product.
///
/// Single-digit numbers are trivially spy, including 0 (sum and product of
/// the lone digit 0 are both 0).
pub fn spy(n: u64) -> bool {
    let mut sum: u64 = 0;
    let mut product: u64 = 1;
    for digit in digits(n) {
        sum += u64::from(digit);
        product *= u64::from(digit);
    }
    sum == product
}

/// Exact perfect-square test.
///
/// Uses an integer square root rather than `f64::sqrt`, which loses
/// precision above 2^52 and misclassifies large squares.
pub fn square(n: u64) -> bool {
    let root = isqrt(n);
    root * root == n
}

/// A sunny number is one less than a perfect square.
pub fn sunny(n: u64) -> bool {
    match n.checked_add(1) {
        Some(next) => square(next),
        // u64::MAX + 1 == 2^64 == (2^32)^2
        None => true,
    }
}

/// A jumping number's adjacent decimal digits differ by exactly 1.
///
/// Single-digit numbers are trivially jumping.
pub fn jumping(mut n: u64) -> bool {
    while n >= 10 {
        let last = n % 10;
        let next = (n / 10) % 10;
        if last.abs_diff(next) != 1 {
            return false;
        }
        n /= 10;
    }
    true
}

/// Iterated digit-square-sum happiness check.
///
/// The digit-square sum is at most 81 per digit, so every trajectory falls
/// below 163 within a few steps and from there either reaches 1 or enters
/// the cycle through 4; both paths pass through a single digit, so the
/// loop terminates. A terminal digit of 1 or 7 counts as happy; 7 is
/// accepted because its trajectory (7, 49, 97, 130, 10, 1) ends at 1
/// anyway, and the two-terminal check is the observable behavior callers
/// depend on.
pub fn happy(mut n: u64) -> bool {
    while n >= 10 {
        n = digit_square_sum(n);
    }
    n == 1 || n == 7
}

/// Complement of [`happy`].
pub fn sad(n: u64) -> bool {
    !happy(n)
}

/// Decimal digits of `n`, most significant first. 0 yields `[0]`.
fn digits(mut n: u64) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push((n % 10) as u8);
        n /= 10;
    }
    out.reverse();
    out
}

fn digit_square_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        let digit = n % 10;
        sum += digit * digit;
        n /= 10;
    }
    sum
}

/// Integer square root by Newton's method: the largest `r` with `r * r <= n`.
fn isqrt(n: u64) -> u64 {
    if n < 4 {
        return u64::from(n > 0);
    }
    // n / 2 + 1 is an upper bound on the root for n >= 4 and, unlike
    // (n + 1) / 2, cannot overflow at u64::MAX.
    let mut x = n;
    let mut y = n / 2 + 1;
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}
