use feedjoin_domain::Month;
use feedjoin_ports::RandomSource;

const FIRST_MONTH: usize = 0;
const LAST_MONTH: usize = 11;

pub struct RandomMonth<'a> {
    source: &'a dyn RandomSource,
}

impl<'a> RandomMonth<'a> {
    pub fn new(source: &'a dyn RandomSource) -> Self {
        Self { source }
    }

    pub fn run(&self) -> Month {
        let index = self.source.number_in_range(FIRST_MONTH, LAST_MONTH);
        Month::from_index(index).unwrap_or(Month::December)
    }
}

pub fn get_random_month(source: &dyn RandomSource) -> Month {
    RandomMonth::new(source).run()
}
