/// A ternary expression.  `rustfmt` spreads an `if`/`else` over five
/// lines, which buries the border-handling tables in the energy and
/// seam code; this keeps each rule on one line.
#[macro_export]
macro_rules! cq {
    ($condition: expr, $when_true: expr, $when_false: expr) => {
        if $condition {
            $when_true
        } else {
            $when_false
        }
    };
}
