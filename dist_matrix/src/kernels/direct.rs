use ndarray::{Array2, ArrayView1, ArrayView2, Axis, NdFloat};
use rayon::prelude::*;

pub(crate) fn squared_euclidean<T: NdFloat>(a: ArrayView1<T>, b: ArrayView1<T>) -> T {
    a.iter().zip(b.iter()).fold(T::zero(), |acc, (&p, &q)| {
        let diff = p - q;
        acc + diff * diff
    })
}

pub(crate) fn direct<T: NdFloat>(x: ArrayView2<T>, y: ArrayView2<T>) -> Array2<T> {
    Array2::from_shape_fn((x.nrows(), y.nrows()), |(i, j)| {
        squared_euclidean(x.row(i), y.row(j))
    })
}

pub(crate) fn par_direct<T: NdFloat>(x: ArrayView2<T>, y: ArrayView2<T>) -> Array2<T> {
    let mut out = Array2::zeros((x.nrows(), y.nrows()));

    out.axis_iter_mut(Axis(0))
        .into_par_iter()
        .zip(x.axis_iter(Axis(0)).into_par_iter())
        .for_each(|(mut out_row, x_row)| {
            for (cell, y_row) in out_row.iter_mut().zip(y.axis_iter(Axis(0))) {
                *cell = squared_euclidean(x_row, y_row);
            }
        });

    out
}
