//! Result of previewing a swap against a pool snapshot.

use super::{Amount, SwapDirection};

/// Breakdown of a previewed swap.
///
/// Admin and holder fees are denominated in the input token when
/// [`SwapQuote::side_fees_on_input`] is `true` and in the output token
/// otherwise. The LP fee is always in the input token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapQuote {
    direction: SwapDirection,
    amount_in: Amount,
    admin_fee: Amount,
    holder_fee: Amount,
    lp_fee: Amount,
    side_fees_on_input: bool,
    net_input: Amount,
    curve_output: Amount,
    amount_out: Amount,
}

impl SwapQuote {
    #[allow(clippy::too_many_arguments)]
    pub(crate) const fn new(
        direction: SwapDirection,
        amount_in: Amount,
        admin_fee: Amount,
        holder_fee: Amount,
        lp_fee: Amount,
        side_fees_on_input: bool,
        net_input: Amount,
        curve_output: Amount,
        amount_out: Amount,
    ) -> Self {
        Self {
            direction,
            amount_in,
            admin_fee,
            holder_fee,
            lp_fee,
            side_fees_on_input,
            net_input,
            curve_output,
            amount_out,
        }
    }

    /// Direction of the trade.
    #[must_use]
    pub const fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Gross amount the trader pays.
    #[must_use]
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Admin fee charged.
    #[must_use]
    pub const fn admin_fee(&self) -> Amount {
        self.admin_fee
    }

    /// Holder fee charged.
    #[must_use]
    pub const fn holder_fee(&self) -> Amount {
        self.holder_fee
    }

    /// LP fee charged on the input.
    #[must_use]
    pub const fn lp_fee(&self) -> Amount {
        self.lp_fee
    }

    /// Whether admin and holder fees were taken from the input.
    #[must_use]
    pub const fn side_fees_on_input(&self) -> bool {
        self.side_fees_on_input
    }

    /// Input that reached the curve after every input-side fee.
    #[must_use]
    pub const fn net_input(&self) -> Amount {
        self.net_input
    }

    /// Curve output before output-side fees.
    #[must_use]
    pub const fn curve_output(&self) -> Amount {
        self.curve_output
    }

    /// Amount the trader receives.
    #[must_use]
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// `true` when the trade yields a positive output.
    #[must_use]
    pub const fn is_executable(&self) -> bool {
        !self.amount_out.is_zero()
    }
}
