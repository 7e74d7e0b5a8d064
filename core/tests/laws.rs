use fallible_core::{Option, Result};
use quickcheck::QuickCheck;

fn opt(value: std::option::Option<i32>) -> Option<i32> { Option::from(value) }
fn res(value: std::result::Result<i32, String>) -> Result<i32, String> { Result::from(value) }

fn f(v: i32) -> i32 { v.wrapping_mul(3) }
fn g(v: i32) -> i32 { v.wrapping_sub(7) }

fn half(v: i32) -> Option<i32> { if v % 2 == 0 { Option::Some(v / 2) } else { Option::None } }
fn positive(v: i32) -> Option<i32> { if v > 0 { Option::Some(v) } else { Option::None } }

fn checked_half(v: i32) -> Result<i32, String> {
  if v % 2 == 0 { Result::Ok(v / 2) } else { Result::Err(format!("{} is odd", v)) }
}
fn checked_positive(v: i32) -> Result<i32, String> {
  if v > 0 { Result::Ok(v) } else { Result::Err(format!("{} is not positive", v)) }
}


fn prop_option_map_identity(x: std::option::Option<i32>) -> bool {
  opt(x).map(|v| v) == opt(x)
}
fn prop_option_map_composition(x: std::option::Option<i32>) -> bool {
  opt(x).map(f).map(g) == opt(x).map(|v| g(f(v)))
}
fn prop_option_flat_map_associativity(x: std::option::Option<i32>) -> bool {
  opt(x).flat_map(half).flat_map(positive) == opt(x).flat_map(|v| half(v).flat_map(positive))
}
fn prop_option_left_identity(v: i32) -> bool {
  Option::Some(v).and_then(half) == half(v)
}
fn prop_option_round_trip(x: i32, e: String) -> bool {
  Option::Some(x).ok_or(e).ok().unwrap() == x
}
fn prop_option_tap_keeps_container(x: std::option::Option<i32>) -> bool {
  let option = opt(x);
  let tapped = option.tap(|v| v.wrapping_add(1));
  option == opt(x) && tapped == opt(x).map(|v| v.wrapping_add(1))
}
fn prop_option_and_or(x: std::option::Option<i32>, y: std::option::Option<i32>) -> bool {
  let and = opt(x).and(opt(y));
  let or = opt(x).or(opt(y));
  (if opt(x).is_some() { and == opt(y) } else { and.is_none() })
    && (if opt(x).is_some() { or == opt(x) } else { or == opt(y) })
}
fn prop_option_sequence(xs: Vec<std::option::Option<i32>>) -> bool {
  let sequenced = Option::sequence(xs.iter().copied().map(opt));
  let expected: std::option::Option<Vec<i32>> = xs.iter().copied().collect();
  sequenced.into_std() == expected
}


fn prop_result_map_identity(x: std::result::Result<i32, String>) -> bool {
  res(x.clone()).map(|v| v) == res(x)
}
fn prop_result_map_composition(x: std::result::Result<i32, String>) -> bool {
  res(x.clone()).map(f).map(g) == res(x).map(|v| g(f(v)))
}
fn prop_result_map_err_leaves_ok(x: i32) -> bool {
  Result::<i32, String>::Ok(x).map_err(|e| e.len()) == Result::Ok(x)
}
fn prop_result_flat_map_associativity(x: std::result::Result<i32, String>) -> bool {
  res(x.clone()).flat_map(checked_half).flat_map(checked_positive)
    == res(x).flat_map(|v| checked_half(v).flat_map(checked_positive))
}
fn prop_result_ok_err_partition(x: std::result::Result<i32, String>) -> bool {
  let result = res(x);
  result.clone().ok().is_some() != result.err().is_some()
}
fn prop_result_tap_keeps_container(x: std::result::Result<i32, String>) -> bool {
  let result = res(x.clone());
  let _ = result.tap(|v| v.wrapping_mul(2));
  result == res(x)
}
fn prop_result_sequence(xs: Vec<std::result::Result<i32, String>>) -> bool {
  let sequenced = Result::sequence(xs.iter().cloned().map(res));
  let expected: std::result::Result<Vec<i32>, String> = xs.into_iter().collect();
  sequenced.into_std() == expected
}


#[test]
fn option_laws() {
  QuickCheck::new().tests(200).quickcheck(prop_option_map_identity as fn(std::option::Option<i32>) -> bool);
  QuickCheck::new().tests(200).quickcheck(prop_option_map_composition as fn(std::option::Option<i32>) -> bool);
  QuickCheck::new().tests(200).quickcheck(prop_option_flat_map_associativity as fn(std::option::Option<i32>) -> bool);
  QuickCheck::new().tests(200).quickcheck(prop_option_left_identity as fn(i32) -> bool);
}

#[test]
fn option_conversions_and_combinators() {
  QuickCheck::new().tests(200).quickcheck(prop_option_round_trip as fn(i32, String) -> bool);
  QuickCheck::new().tests(200).quickcheck(prop_option_tap_keeps_container as fn(std::option::Option<i32>) -> bool);
  QuickCheck::new()
    .tests(200)
    .quickcheck(prop_option_and_or as fn(std::option::Option<i32>, std::option::Option<i32>) -> bool);
  QuickCheck::new().tests(100).quickcheck(prop_option_sequence as fn(Vec<std::option::Option<i32>>) -> bool);
}

#[test]
fn result_laws() {
  QuickCheck::new().tests(200).quickcheck(prop_result_map_identity as fn(std::result::Result<i32, String>) -> bool);
  QuickCheck::new().tests(200).quickcheck(prop_result_map_composition as fn(std::result::Result<i32, String>) -> bool);
  QuickCheck::new().tests(200).quickcheck(prop_result_map_err_leaves_ok as fn(i32) -> bool);
  QuickCheck::new()
    .tests(200)
    .quickcheck(prop_result_flat_map_associativity as fn(std::result::Result<i32, String>) -> bool);
}

#[test]
fn result_conversions_and_combinators() {
  QuickCheck::new().tests(200).quickcheck(prop_result_ok_err_partition as fn(std::result::Result<i32, String>) -> bool);
  QuickCheck::new()
    .tests(200)
    .quickcheck(prop_result_tap_keeps_container as fn(std::result::Result<i32, String>) -> bool);
  QuickCheck::new().tests(100).quickcheck(prop_result_sequence as fn(Vec<std::result::Result<i32, String>>) -> bool);
}
