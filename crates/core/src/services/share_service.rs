use crate::models::loan::LoanResult;

/// Builds the shareable plain-text summary of a loan calculation.
///
/// The text matches what the app shows on screen: Thai labels, th-TH
/// digit grouping, whole-baht figures for the principal amounts and
/// 2-decimal figures for the computed ones. Actually invoking the
/// platform share sheet or clipboard is the frontend's job — the core
/// only produces the text.
pub struct ShareService;

impl ShareService {
    /// Render the line-oriented summary for a completed calculation.
    #[must_use]
    pub fn summary_text(result: &LoanResult) -> String {
        format!(
            "ผลการคำนวณไฟแนนซ์รถยนต์:\n\
             - ราคารถ: {price} บาท\n\
             - เงินดาวน์: {down} บาท\n\
             - ยอดจัดไฟแนนซ์: {financed} บาท\n\
             - ระยะเวลาผ่อนชำระ: {term} ปี\n\
             - อัตราดอกเบี้ย: {rate}% ต่อปี\n\
             - ค่างวดต่อเดือน: {installment} บาท\n\
             - ดอกเบี้ยทั้งหมด: {interest} บาท\n\
             - ยอดชำระทั้งหมด: {total} บาท",
            price = format_baht(result.car_price, 0),
            down = format_baht(result.down_payment, 0),
            financed = format_baht(result.financed_amount, 0),
            term = result.loan_term.years(),
            rate = format_rate(result.annual_interest_rate_percent),
            installment = format_baht(result.monthly_installment, 2),
            interest = format_baht(result.total_interest, 2),
            total = format_baht(result.total_payment, 2),
        )
    }
}

/// Format a baht amount with th-TH digit grouping (comma thousands,
/// period decimal) and a fixed number of fraction digits.
#[must_use]
pub fn format_baht(value: f64, decimals: usize) -> String {
    let fixed = format!("{value:.decimals$}");
    let (sign, digits) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match digits.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Interest rates are shown the way the user typed them: "5" not "5.00",
/// "4.5" not "4.50". Two decimals at most, trailing zeros trimmed.
fn format_rate(rate: f64) -> String {
    let fixed = format!("{rate:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}
