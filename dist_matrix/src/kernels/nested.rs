use ndarray::{Array2, ArrayView2, ArrayViewMut1, Axis, NdFloat};
use rayon::prelude::*;

fn nested_row<T: NdFloat>(i: usize, x: ArrayView2<T>, y: ArrayView2<T>, mut out_row: ArrayViewMut1<T>) {
    let dims = x.ncols();
    for j in 0..y.nrows() {
        let mut acc = T::zero();
        for k in 0..dims {
            let diff = x[[i, k]] - y[[j, k]];
            acc += diff * diff;
        }
        out_row[j] = acc;
    }
}

pub(crate) fn nested<T: NdFloat>(x: ArrayView2<T>, y: ArrayView2<T>) -> Array2<T> {
    let (n, dims) = x.dim();
    let m = y.nrows();
    let mut out = Array2::zeros((n, m));

    for i in 0..n {
        for j in 0..m {
            let mut acc = T::zero();
            for k in 0..dims {
                let diff = x[[i, k]] - y[[j, k]];
                acc += diff * diff;
            }
            out[[i, j]] = acc;
        }
    }

    out
}

pub(crate) fn par_nested<T: NdFloat>(x: ArrayView2<T>, y: ArrayView2<T>) -> Array2<T> {
    let mut out = Array2::zeros((x.nrows(), y.nrows()));

    out.axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, out_row)| nested_row(i, x, y, out_row));

    out
}
