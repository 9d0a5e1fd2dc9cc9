use crate::errors::GenerateResult;
use crate::random::Random;

const ACCOUNT_TYPES: &[&str] = &[
    "Savings",
    "Checking",
    "Money Market",
    "Investment",
    "Credit Card",
    "Personal Loan",
];
const CURRENCY_CODES: &[&str] = &[
    "USD", "EUR", "GBP", "JPY", "AUD", "CAD", "CHF", "CNY", "SEK", "NZD", "INR", "BRL", "RUB",
    "KRW",
];
const CURRENCY_NAMES: &[&str] = &[
    "US Dollar",
    "Euro",
    "British Pound",
    "Japanese Yen",
    "Australian Dollar",
    "Canadian Dollar",
    "Swiss Franc",
    "Chinese Yuan",
    "Swedish Krona",
    "New Zealand Dollar",
    "Indian Rupee",
    "Brazilian Real",
    "Russian Ruble",
    "South Korean Won",
];
const CURRENCY_SYMBOLS: &[&str] = &["$", "€", "£", "¥", "₹", "R$", "₽", "₩", "kr", "CHF"];
const TRANSACTION_TYPES: &[&str] = &["deposit", "withdrawal", "payment", "invoice", "transfer"];

const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LETTERS_AND_DIGITS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const BASE58: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";
const HEX_LOWER: &[u8] = b"0123456789abcdef";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardIssuer {
    Visa,
    Mastercard,
    Amex,
    Discover,
}

impl CardIssuer {
    pub const ALL: &'static [CardIssuer] = &[
        CardIssuer::Visa,
        CardIssuer::Mastercard,
        CardIssuer::Amex,
        CardIssuer::Discover,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "visa" => Some(Self::Visa),
            "mastercard" => Some(Self::Mastercard),
            "amex" => Some(Self::Amex),
            "discover" => Some(Self::Discover),
            _ => None,
        }
    }

    fn length(self) -> usize {
        match self {
            Self::Amex => 15,
            _ => 16,
        }
    }
}

/// Account, card and currency values. Not localized.
pub struct FinanceModule<'a> {
    random: &'a mut Random,
}

impl<'a> FinanceModule<'a> {
    pub fn new(random: &'a mut Random) -> Self {
        Self { random }
    }

    /// Amount in `[min, max]` with `decimals` places after `symbol`.
    pub fn amount(
        &mut self,
        min: f64,
        max: f64,
        decimals: u32,
        symbol: &str,
    ) -> GenerateResult<String> {
        let amount = self.random.float(min, max, decimals)?;
        Ok(format!("{symbol}{amount:.prec$}", prec = decimals as usize))
    }

    pub fn account(&mut self, length: usize) -> String {
        self.random.string_from(b"0123456789", length)
    }

    pub fn account_name(&mut self) -> GenerateResult<String> {
        let kind = self.random.pick(ACCOUNT_TYPES)?;
        Ok(format!("{kind} Account"))
    }

    pub fn routing_number(&mut self) -> String {
        self.account(9)
    }

    /// Card number with the issuer's prefix and length. `None` draws an issuer.
    /// Formatted numbers are grouped by four, or 4-6-5 for Amex.
    pub fn credit_card_number(
        &mut self,
        issuer: Option<CardIssuer>,
        formatted: bool,
    ) -> GenerateResult<String> {
        let issuer = match issuer {
            Some(issuer) => issuer,
            None => *self.random.pick(CardIssuer::ALL)?,
        };
        let prefix = match issuer {
            CardIssuer::Visa => "4".to_string(),
            CardIssuer::Mastercard => format!("5{}", self.random.int(1, 5)?),
            CardIssuer::Amex => format!("3{}", self.random.pick(&['4', '7'])?),
            CardIssuer::Discover => "6011".to_string(),
        };
        let template = format!("{prefix}{}", "#".repeat(issuer.length() - prefix.len()));
        let number = self.random.fill_symbol(&template, '#');

        if !formatted {
            return Ok(number);
        }
        Ok(match issuer {
            CardIssuer::Amex => format!("{}-{}-{}", &number[..4], &number[4..10], &number[10..]),
            _ => group(&number, 4, '-'),
        })
    }

    pub fn cvv(&mut self) -> String {
        self.account(3)
    }

    /// Country code, two check digits, bank code and 14 account digits.
    pub fn iban(&mut self, country_code: &str, formatted: bool) -> GenerateResult<String> {
        let check_digits = self.random.int(10, 99)?;
        let account = self.account(14);
        let iban = format!("{country_code}{check_digits}WEST{account}");
        Ok(if formatted { group(&iban, 4, ' ') } else { iban })
    }

    /// Eight-character BIC: bank, country, location.
    pub fn bic(&mut self) -> String {
        let bank_and_country = self.random.string_from(LETTERS, 6);
        let location = self.random.string_from(LETTERS_AND_DIGITS, 2);
        format!("{bank_and_country}{location}")
    }

    pub fn bitcoin(&mut self) -> GenerateResult<String> {
        let lead = self.random.pick(&['1', '3'])?;
        Ok(format!("{lead}{}", self.random.string_from(BASE58, 33)))
    }

    pub fn ethereum(&mut self) -> String {
        format!("0x{}", self.random.string_from(HEX_LOWER, 40))
    }

    pub fn currency_code(&mut self) -> GenerateResult<String> {
        self.pick(CURRENCY_CODES)
    }

    pub fn currency_name(&mut self) -> GenerateResult<String> {
        self.pick(CURRENCY_NAMES)
    }

    pub fn currency_symbol(&mut self) -> GenerateResult<String> {
        self.pick(CURRENCY_SYMBOLS)
    }

    pub fn transaction_type(&mut self) -> GenerateResult<String> {
        self.pick(TRANSACTION_TYPES)
    }

    fn pick(&mut self, values: &'static [&'static str]) -> GenerateResult<String> {
        self.random.pick(values).map(|value| value.to_string())
    }
}

fn group(value: &str, size: usize, separator: char) -> String {
    let mut grouped = String::with_capacity(value.len() + value.len() / size);
    for (index, c) in value.chars().enumerate() {
        if index > 0 && index % size == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }
    grouped
}
