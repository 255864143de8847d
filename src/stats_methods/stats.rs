//mean, variance and histograms of degree sequences

#[derive(Clone, Debug, PartialEq)]
pub struct MyVariance
{
    pub mean: f64,
    pub var: f64
}

impl MyVariance{

    pub fn mean(&self) -> f64
    {
        self.mean
    }

    pub fn variance(&self) -> f64
    {
        self.var
    }

    /// `None` for an empty slice
    pub fn from_slice(slice: &[usize]) -> Option<Self>
    {
        if slice.is_empty(){
            return None;
        }
        let mean = calc_average(slice);
        let var = calc_variance(slice, mean);
        Some(
            Self{
                mean,
                var
            }
        )
    }
}

/// slice must not be empty
pub fn calc_average(slice: &[usize]) -> f64
{
    let sum: f64 = slice.iter()
        .map(|&val| val as f64)
        .sum();

    sum / slice.len() as f64
}

pub fn calc_variance(slice: &[usize], average: f64) -> f64
{
    let var_sum: f64 = slice.iter()
        .map(
            |&val|
            {
                let dif = average - val as f64;
                dif * dif
            }
        ).sum();

    var_sum / slice.len() as f64
}

/// `hist[k]` is the number of entries equal to `k`.
/// Entries above `cap` are counted in `hist[cap]`
pub fn histogram(slice: &[usize], cap: usize) -> Vec<usize>
{
    let max = slice.iter()
        .copied()
        .max()
        .unwrap_or(0)
        .min(cap);
    let mut hist = vec![0; max + 1];
    for &val in slice{
        hist[val.min(max)] += 1;
    }
    hist
}
