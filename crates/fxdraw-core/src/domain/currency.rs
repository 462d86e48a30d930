/// Currency codes a draw requests from Norges Bank, in query order.
///
/// This is the full daily fixing list, including the aggregate indices the
/// bank publishes alongside ISO currencies (I44 import-weighted index, TWI
/// trade-weighted index, XDR special drawing rights). The set is fixed: it
/// defines both the provider query and the number of observations a valid
/// response must carry.
pub const CURRENCIES: [&str; 37] = [
    "AUD", "BDT", "BRL", "CAD", "CHF", "CNY", "CZK", "DKK", "EUR", "GBP", //
    "HKD", "HUF", "I44", "IDR", "ILS", "INR", "ISK", "JPY", "KRW", "MMK", //
    "MXN", "MYR", "NZD", "PHP", "PKR", "PLN", "RON", "SEK", "SGD", "THB", //
    "TRY", "TWD", "TWI", "USD", "VND", "XDR", "ZAR",
];
