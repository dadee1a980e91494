//! Customer Table Component

use leptos::prelude::*;
use leptos_router::components::A;

use basket_rules::Customer;

/// One row per customer, the id linking to its edit page
#[component]
pub fn CustomerTable(customers: Vec<Customer>) -> impl IntoView {
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Name"</th>
                    <th>"Min Total Fruits"</th>
                    <th>"Max Total Fruits"</th>
                </tr>
            </thead>
            <tbody>
                {customers.into_iter().map(|customer| {
                    view! {
                        <tr>
                            <td>
                                <A href=format!("/customers/{}", customer.id)>{customer.id}</A>
                            </td>
                            <td>{customer.name}</td>
                            <td>{customer.min_total_fruit}</td>
                            <td>{customer.max_total_fruit}</td>
                        </tr>
                    }
                }).collect_view()}
            </tbody>
        </table>
    }
}
