//! Fixed legal wording of the Licence 'A' instrument.
//!
//! The rich-document and PDF renderers lay out the same paragraphs in
//! different encodings, so the wording lives here once. The Markdown and
//! HTML templates carry the same text; the integration tests check that the
//! static clauses below appear verbatim in every output.

use chrono::{Datelike, NaiveDate};

use super::fields::LicenseFields;
use super::year_words::year_in_words;

pub const RESIDENTIAL: &str = "R e s i d e n t i a l";
pub const AUTHORITY: &str = "Pakistan Defence Officers Housing Authority";
pub const CITY: &str = "K a r a c h i";
pub const COVER_LICENCE: &str = "Licence – 'a'";
pub const LICENCE: &str = "Licence 'a'";
pub const SCHEDULE_HEADING: &str = "THE SCHEDULE ABOVE REFERRED TO";

/// Width of the dashed rules on the cover page.
pub const DIVIDER_WIDTH: usize = 75;

/// Hardcoded page numbers placed at the manual page breaks.
///
/// These do not follow real pagination; a long address or schedule can push
/// content across an extra page and the numbers will no longer match.
pub const PAGE_NUMBERS: [&str; 3] = ["2", "3", "4"];

pub const LICENCE_RECITAL: &str = "AND WHEREAS under the licence the 2nd Party is entitled to enter upon the said plot of land for the purpose of constructing a building thereon.";

pub const WITNESSETH: &str = "NOW THIS INDENTURE WITNESSETH as follows :--";

pub const OPERATIVE_CLAUSE: &str = "That the 1st Party do hereby authorise and permit the 2nd Party to enter upon the said plot of land for the purpose of constructing a building thereon in accordance with the terms and conditions hereinafter following :--";

pub const CONDITION_CONSTRUCTION: &str = "The 2nd Party shall at his own cost and within the period of 2 years from the date of execution of this licence erect, complete and finish upon the said plot a residential house in accordance with the plan and design approved by the competent authority (hereinafter called the \"Authority\") subject to the condition that no construction work shall be started by the 2nd Party on his plot unless the preliminary stages of development shall have been completed and permission in writing shall have been obtained from the Authority. In the event of the licensee failing to comply with the conditions hereinafter appearing the 1st Party may at his discretion recover from the 2nd Party as agreed liquidated damages and not by way of penalty a sum equal to half per sent of the estimated cost of work remaining incomplete for every month the work remains incomplete subject to maximum of 5 per cent of the estimated cost of the work remaining un-finished after the due date. Provided that if the licensee fails to complete and finish the building by the date finally fixed by the Authority, the 1st Party may terminate this licence and resume the plot and any structures erected thereon.";

pub const CONDITION_BYE_LAWS: &str = "The construction shall be done in accordance with the building bye-laws and the rules laid down by the Authority (1st Party).";

pub const CONDITION_DEVOLUTION: &str = "With the execution of these presents the rights and liabilities accrued under this instrument shall devolve upon the 2nd Party and he shall be bound by such terms and conditions of the licence as are expressly or by necessary implication or analogy applicable to him.";

pub const CONDITION_LEASE: &str = "This is a licence with permission to build and occupy. After the completion of the building a proper lease will be given to the Licensee for a period of 99 years by the (1st Party) on such terms and conditions as they deem necessary or may be imposed by the Government or any other Authority.";

pub const CONDITION_DEPOSIT: &str = "The Licensee shall deposit with any scheduled bank duly authorised by the 1st Party or with the 1st Party :";

pub const CONDITION_DEVELOPMENT_CHARGES: &str = "The 2nd Party shall pay all the calls (hereinafter called the \"development charges\") levied by the 1st Party from time to time at their office for an amount equal to the proportion of expenses to be incurred by the (1st Party) on the execution and completion of the development schemes. The decision of the Executive Board of the 1st Party as to the amount so payable shall be final and binding on the licensee.";

pub const CONDITION_ARREARS: &str = "All arrears of payments due and payable by the Licensee shall be recoverable as arrears of land revenues.";

pub const LEASE_CLAUSE: &str = "It is hereby agreed that on the completion of the building in accordance with the said terms and conditions and on the licensee complying with the said rules he shall be entitled to a lease of the said plot for 99 years in the form prescribed by the Executive Board of the 1st Party and IT IS HEREBY FURTHER AGREED that until such lease has been granted by the (1st Party) the licensee shall not have any right or interest in the said plot except that of a bare licensee and shall not without the previous permission in writing of the (1st Party) transfer his interest in the area allotted to him either in part or whole except for the purpose of raising loans from the House Building Finance Corporation, authorised banks and insurance companies for construction of building thereon.";

pub const TERMINATION_CLAUSE: &str = "Should the licensee commit breach of any of the terms and conditions of these presents or should he neglect to comply with any direction given to him by the 1st Party or in any other respect fail to carry out his obligations under these presents for reasons not beyond his control or fail to pay development charges or other dues, the 1st Party shall have the right to terminate this licence and on such termination the payment made by him to the 1st Party shall be forfeited and he shall have no further claim whatsoever against the 1st Party except at the option of 1st Party he may receive compensation to the extent of the amount of actual expenditure incurred by him on the plot.";

pub const PROVISO: &str = "Provided that the 1st Party may in his absolute discretion have the building sold out either by public auction or private contract, in which case the licensee shall be entitled to the net sale proceeds of the building or to the amount of actual expenditure incurred by him on having the building constructed whichever is less.";

pub const SECRETARY_SIGNATURE: &str = "SIGNED by the Secretary, Pakistan\t\t\t\t    …………………………………………...\nDefence Officers Housing Authority Karachi.\t\t\t               Signature of the Secretary\nIn the presence of :\t\t\t\t\t\t                 1st Party";

pub const BOARD_MEMBER_SIGNATURE: &str = "\t\t\t\t\t\t    …………………………………………...\n\t\t\t\t\t\t\t\t Member Executive Board";

/// Every clause whose wording carries no field values.
pub const STATIC_CLAUSES: [&str; 12] = [
    LICENCE_RECITAL,
    WITNESSETH,
    OPERATIVE_CLAUSE,
    CONDITION_CONSTRUCTION,
    CONDITION_BYE_LAWS,
    CONDITION_DEVOLUTION,
    CONDITION_LEASE,
    CONDITION_DEPOSIT,
    CONDITION_DEVELOPMENT_CHARGES,
    CONDITION_ARREARS,
    LEASE_CLAUSE,
    TERMINATION_CLAUSE,
];

/// A numbered clause: its marker ("1.", "(iv)", "(a)") and wording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub marker: &'static str,
    pub text: String,
}

impl Clause {
    fn new(marker: &'static str, text: impl Into<String>) -> Self {
        Self {
            marker,
            text: text.into(),
        }
    }

    /// Marker and wording separated by a tab, the way the clause is typed
    /// into a word processor.
    pub fn tabbed(&self) -> String {
        format!("{}\t{}", self.marker, self.text)
    }
}

/// Dashed rule used on the cover page.
pub fn divider() -> String {
    "-".repeat(DIVIDER_WIDTH)
}

/// "1st", "2nd", "3rd", "4th", … "11th", "21st".
pub fn ordinal(day: u32) -> String {
    let suffix = match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{day}{suffix}")
}

/// Registry dates are written day-month-year with dashes.
pub fn register_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// Long-form date used by the text templates, e.g. "05 March 2025".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%d %B %Y").to_string()
}

/// Interpolates one field dictionary into the licence wording.
#[derive(Debug, Clone, Copy)]
pub struct LicenseProse<'a> {
    fields: &'a LicenseFields,
    executed_on: NaiveDate,
}

impl<'a> LicenseProse<'a> {
    pub fn new(fields: &'a LicenseFields, executed_on: NaiveDate) -> Self {
        Self {
            fields,
            executed_on,
        }
    }

    /// Opening paragraph naming both parties and the execution date.
    pub fn indenture(&self) -> String {
        let f = self.fields;
        format!(
            "THIS INDENTURE made this {day} day of {month} (in the year two thousand and {year}) BETWEEN the Pakistan Defence Officers Housing Authority established under Article 4 of Pakistan Defence Officers Housing Authority Order, 1980, having its office at Korangi Road, Karachi (hereinafter called the \"1st Party\") AND {name}\n{address}\n(hereinafter called the \"Licensee-2nd Party\". The terms 1st Party and 2nd Party shall include their respective executors, successors-in-interest and assigns).",
            day = ordinal(self.executed_on.day()),
            month = self.executed_on.format("%B"),
            year = year_in_words(self.executed_on.year()),
            name = f.licensee_name,
            address = f.licensee_address,
        )
    }

    /// Recital of the Karachi Port Trust lease deed.
    pub fn kpt_recital(&self) -> String {
        let f = self.fields;
        format!(
            "WHEREAS the (KPT) Karachi Port Trust (hereinafter referred to as the lessor) through a deed registered in the office of the Sub-Registrar {sub_registrar} Town, Karachi, as No {book_no} Book-I dated {book_date}, M.F. Roll No.{roll_no} dated {roll_date} admeasuring {land_size} acres, had authorised the Pakistan Defence Officers Housing Authority, Karachi (hereinafter called the Authority) to enter upon the entire area of land shown in the plan attached to the lease including the plot referred to hereinafter for the purpose of developing it and for the construction of building, possession whereof had already been taken over by the Authority subject to, the terms and conditions contained in the Agreement;",
            sub_registrar = f.sub_registrar,
            book_no = f.kpt_book_no,
            book_date = register_date(f.kpt_book_date),
            roll_no = f.kpt_mf_roll_no,
            roll_date = register_date(f.kpt_mf_roll_date),
            land_size = f.land_size,
        )
    }

    /// Recital of the Authority's title to the land.
    pub fn possession_recital(&self) -> String {
        let f = self.fields;
        format!(
            "AND WHEREAS the 1st Party now being fully entitled to seize and well possessed of all the piece and parcel of land measuring {land_size} acres of land in Deh {deh} bearing survey sheet No. {sheet} and fully described in the Schedule hereunder and fully competent and legally entitled as owners to allot the same.",
            land_size = f.land_size,
            deh = f.deh,
            sheet = f.survey_sheet_number,
        )
    }

    /// Recital of the allotment or transfer order.
    pub fn transfer_recital(&self) -> String {
        let f = self.fields;
        format!(
            "AND WHEREAS the licensee has been allotted / transferred vide allotment / transfer order No {order_no} dated {order_date} the plot bearing No. {plot} Survey Sheet No.{sheet} in the territorial division of {division} Police Station in the layout plan of the entire area measuring {land_size} acres as shown in the Schedule hereunder.",
            order_no = f.transfer_order_no,
            order_date = register_date(f.transfer_order_date),
            plot = f.plot_number,
            sheet = f.survey_sheet_number,
            division = f.territorial_division,
            land_size = f.land_size,
        )
    }

    /// Clause 1 of the operative part.
    pub fn operative_clause(&self) -> Clause {
        Clause::new("1.", OPERATIVE_CLAUSE)
    }

    /// Conditions (i) to (vi) of clause 1, including the payment items.
    pub fn conditions(&self) -> Vec<Clause> {
        let f = self.fields;
        vec![
            Clause::new("(i)", CONDITION_CONSTRUCTION),
            Clause::new("(ii)", CONDITION_BYE_LAWS),
            Clause::new("(iii)", CONDITION_DEVOLUTION),
            Clause::new("(iv)", CONDITION_LEASE),
            Clause::new("(v)", CONDITION_DEPOSIT),
            Clause::new(
                "(a)",
                format!(
                    "The amount at the rate of Rs.{} per square yard to be paid in lump sum before execution of this licence agreement towards the premium of the plot.",
                    f.premium_rate
                ),
            ),
            Clause::new(
                "(b)",
                format!(
                    "The ground rent is payable in advance on or before the first day of July every year at the rate of {} paisas per square yard per annum. The first payment shall be made on the first day of July, next following the day when the licensee takes possession of the plot allotted/transferred to him/her,",
                    f.ground_rent_rate
                ),
            ),
            Clause::new("(vi)", CONDITION_DEVELOPMENT_CHARGES),
        ]
    }

    /// Condition (vii), which falls after the second page break.
    pub fn arrears_condition(&self) -> Clause {
        Clause::new("(vii)", CONDITION_ARREARS)
    }

    /// Clauses 2 and 3 of the operative part.
    pub fn closing_clauses(&self) -> [Clause; 2] {
        [
            Clause::new("2.", LEASE_CLAUSE),
            Clause::new("3.", TERMINATION_CLAUSE),
        ]
    }

    /// The schedule describing the plot and its four boundaries.
    pub fn schedule(&self) -> String {
        let f = self.fields;
        format!(
            "ALL that piece and parcel of land measuring {area} square yards bearing Plot No {plot} and bounded\nNorth................... {north}\nSouth ................{south}\nEast................... {east}\nWest................... {west}\nSituated in Police Station {station}",
            area = f.plot_area,
            plot = f.plot_number,
            north = f.north_boundary,
            south = f.south_boundary,
            east = f.east_boundary,
            west = f.west_boundary,
            station = f.police_station,
        )
    }

    /// Licensee's signature block with both witnesses.
    pub fn witness_block(&self) -> String {
        let f = self.fields;
        format!(
            "SIGNED by the above named\t\t\t\t    …………………………………………...\nLicensee – 2nd Party in the\t\t\t\t\t        Licensee / 2nd Party\nPresence of :\nWitness: (1)  Signature:……………………………..\n\tName: {w1_name}\n\tAddress: {w1_address}\n\tCNIC #: {w1_cnic}\n\n\n  (2)  Signature:……………………………..\n\tName: {w2_name}\n\tAddress: {w2_address}\n\tCNIC #: {w2_cnic}",
            w1_name = f.witness1_name,
            w1_address = f.witness1_address,
            w1_cnic = f.witness1_cnic,
            w2_name = f.witness2_name,
            w2_address = f.witness2_address,
            w2_cnic = f.witness2_cnic,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> LicenseFields {
        LicenseFields::sample(NaiveDate::from_ymd_opt(2024, 2, 9).unwrap())
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ───────────────────────────────────────────────────────────────
    // Date formatting
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn ordinal_suffixes() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(13), "13th");
        assert_eq!(ordinal(21), "21st");
        assert_eq!(ordinal(22), "22nd");
        assert_eq!(ordinal(23), "23rd");
        assert_eq!(ordinal(31), "31st");
    }

    #[test]
    fn register_date_is_day_month_year() {
        assert_eq!(register_date(date(2024, 2, 9)), "09-02-2024");
    }

    #[test]
    fn long_date_spells_month() {
        assert_eq!(long_date(date(2025, 3, 5)), "05 March 2025");
    }

    // ───────────────────────────────────────────────────────────────
    // Interpolated paragraphs
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn indenture_states_execution_date_in_words() {
        let fields = fields();
        let prose = LicenseProse::new(&fields, date(2025, 10, 22));

        let text = prose.indenture();

        assert!(text.starts_with(
            "THIS INDENTURE made this 22nd day of October (in the year two thousand and twenty five) BETWEEN"
        ));
        assert!(text.contains("AND Muhammad Ahmed\nHouse No. 123, Street 45\nPhase 6, DHA"));
    }

    #[test]
    fn indenture_leaves_gap_for_untabled_year() {
        let fields = fields();
        let prose = LicenseProse::new(&fields, date(2031, 1, 1));

        assert!(prose
            .indenture()
            .contains("(in the year two thousand and ) BETWEEN"));
    }

    #[test]
    fn kpt_recital_uses_register_dates() {
        let fields = fields();
        let prose = LicenseProse::new(&fields, date(2025, 1, 1));

        let text = prose.kpt_recital();

        assert!(text.contains("as No KPT-2024-001 Book-I dated 09-02-2024"));
        assert!(text.contains("M.F. Roll No.MF-2024-001 dated 09-02-2024 admeasuring 0.25 acres"));
    }

    #[test]
    fn payment_conditions_carry_rates() {
        let fields = fields();
        let prose = LicenseProse::new(&fields, date(2025, 1, 1));

        let conditions = prose.conditions();
        let markers: Vec<_> = conditions.iter().map(|c| c.marker).collect();

        assert_eq!(markers, ["(i)", "(ii)", "(iii)", "(iv)", "(v)", "(a)", "(b)", "(vi)"]);
        assert!(conditions[5].text.contains("Rs.5000.00 per square yard"));
        assert!(conditions[6].text.contains("rate of 50.00 paisas"));
    }

    #[test]
    fn schedule_lists_all_boundaries() {
        let fields = fields();
        let prose = LicenseProse::new(&fields, date(2025, 1, 1));

        let lines: Vec<_> = prose.schedule().lines().map(str::to_string).collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "North................... Plot A-124");
        assert_eq!(lines[2], "South ................Road 5");
        assert_eq!(lines[5], "Situated in Police Station Defence Police Station");
    }

    #[test]
    fn clause_tabbed_joins_marker_and_text() {
        let fields = fields();
        let prose = LicenseProse::new(&fields, date(2025, 1, 1));

        assert_eq!(
            prose.arrears_condition().tabbed(),
            format!("(vii)\t{CONDITION_ARREARS}")
        );
    }

    #[test]
    fn divider_is_seventy_five_dashes() {
        assert_eq!(divider().len(), 75);
        assert!(divider().chars().all(|c| c == '-'));
    }
}
